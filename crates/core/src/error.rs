//! Error types for the ambient network.
//!
//! The per-frame pipeline is total and never produces these. They only
//! surface while building a [`NetworkConfig`](crate::config::NetworkConfig),
//! a [`Viewport`](crate::viewport::Viewport), or at host boundaries.

use thiserror::Error;

/// Errors produced while configuring or hosting a network.
#[derive(Debug, Error)]
pub enum NetError {
    /// Width or height was negative or non-finite.
    #[error("invalid dimensions: width and height must be finite and non-negative, got ({width}, {height})")]
    InvalidDimensions { width: f64, height: f64 },

    /// A configuration value was outside its allowed range.
    #[error("invalid config value for '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// A color could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A resize policy name was not recognized.
    #[error("unknown resize policy: {0}")]
    UnknownResizePolicy(String),

    /// Writing a frame or snapshot failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl NetError {
    /// Shorthand for [`NetError::InvalidConfig`].
    pub fn invalid_config(name: &str, reason: impl Into<String>) -> Self {
        NetError::InvalidConfig {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_includes_both_values() {
        let err = NetError::InvalidDimensions {
            width: 0.0,
            height: 441.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("width") && msg.contains("height"), "got: {msg}");
        assert!(msg.contains("441"), "missing height in: {msg}");
    }

    #[test]
    fn invalid_config_includes_name_and_reason() {
        let err = NetError::invalid_config("link_radius", "must be >= 0");
        let msg = format!("{err}");
        assert!(msg.contains("link_radius"), "missing name in: {msg}");
        assert!(msg.contains(">= 0"), "missing reason in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = NetError::InvalidColor("expected 3 components".into());
        assert!(format!("{err}").contains("3 components"));
    }

    #[test]
    fn unknown_resize_policy_includes_name() {
        let err = NetError::UnknownResizePolicy("shuffle".into());
        assert!(format!("{err}").contains("shuffle"));
    }

    #[test]
    fn io_includes_message() {
        let err = NetError::Io("disk full".into());
        assert!(format!("{err}").contains("disk full"));
    }

    #[test]
    fn net_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NetError>();
    }

    #[test]
    fn net_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<NetError>();
    }
}
