#![deny(unsafe_code)]
//! Core types for the ambient network.
//!
//! Provides the `NoiseField` trait and its Perlin implementation, the
//! object-safe `Surface` drawing trait, `Viewport` sizing, the startup
//! `NetworkConfig`, color types, the `Xorshift64` PRNG and lenient JSON
//! parameter helpers.

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod params;
pub mod prng;
pub mod surface;
pub mod viewport;

pub use color::{Rgb, Rgba};
pub use config::{NetworkConfig, ResizePolicy};
pub use error::NetError;
pub use field::{ConstantNoise, NoiseField, PerlinNoise};
pub use glam::DVec2;
pub use prng::Xorshift64;
pub use surface::{Primitive, Surface};
pub use viewport::Viewport;
