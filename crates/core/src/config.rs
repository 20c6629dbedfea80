//! Startup configuration for an ambient network.
//!
//! A [`NetworkConfig`] is fixed when the network is created. It can be built
//! from defaults, deserialized whole, or overlaid from a partial JSON object
//! with [`NetworkConfig::from_json`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::color::Rgb;
use crate::error::NetError;
use crate::params::{param_f64, param_rgb, param_string, param_u32, param_usize};

const DEFAULT_NODE_COUNT: usize = 90;
/// Largest accepted `node_count`; the graph pass is quadratic in it.
pub const MAX_NODE_COUNT: usize = 100_000;
const DEFAULT_LINK_RADIUS: f64 = 120.0;
const DEFAULT_BASE_NODE_SIZE: f64 = 2.4;
const DEFAULT_DEGREE_SIZE_GAIN: f64 = 0.6;
const DEFAULT_HOVER_RADIUS: f64 = 110.0;
const DEFAULT_DRIFT_STRENGTH: f64 = 0.45;
const DEFAULT_NOISE_SCALE: f64 = 0.0009;
const DEFAULT_NOISE_TIME_SCALE: f64 = 0.002;
const DEFAULT_NOISE_OCTAVES: u32 = 4;
const DEFAULT_BACKGROUND: Rgb = Rgb::new(15, 17, 22);
const DEFAULT_FOREGROUND: Rgb = Rgb::new(220, 224, 235);
const DEFAULT_HALO: Rgb = Rgb::new(130, 180, 255);

/// What happens to node positions when the viewport is resized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Keep positions; nodes outside the new bounds are clamped on the next advance.
    #[default]
    Preserve,
    /// Scatter every node afresh across the new viewport.
    Reinitialize,
}

impl ResizePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ResizePolicy::Preserve => "preserve",
            ResizePolicy::Reinitialize => "reinitialize",
        }
    }
}

impl fmt::Display for ResizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizePolicy {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preserve" => Ok(ResizePolicy::Preserve),
            "reinitialize" => Ok(ResizePolicy::Reinitialize),
            other => Err(NetError::UnknownResizePolicy(other.to_string())),
        }
    }
}

/// Every tunable of the network, fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of nodes created at startup.
    pub node_count: usize,
    /// Two nodes closer than this (strictly) are linked.
    pub link_radius: f64,
    /// Diameter of a node with no links.
    pub base_node_size: f64,
    /// Growth of the node diameter per `sqrt(degree)`, before the cap.
    pub degree_size_gain: f64,
    /// Nodes closer than this (strictly) to the pointer get a halo.
    pub hover_radius: f64,
    /// Maximum per-frame drift along each axis is half of this.
    pub drift_strength: f64,
    /// Spatial frequency of the noise sampled for drift.
    pub noise_scale: f64,
    /// Noise time units per elapsed millisecond.
    pub noise_time_scale: f64,
    pub noise_octaves: u32,
    pub background: Rgb,
    pub foreground: Rgb,
    pub halo: Rgb,
    pub resize_policy: ResizePolicy,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            link_radius: DEFAULT_LINK_RADIUS,
            base_node_size: DEFAULT_BASE_NODE_SIZE,
            degree_size_gain: DEFAULT_DEGREE_SIZE_GAIN,
            hover_radius: DEFAULT_HOVER_RADIUS,
            drift_strength: DEFAULT_DRIFT_STRENGTH,
            noise_scale: DEFAULT_NOISE_SCALE,
            noise_time_scale: DEFAULT_NOISE_TIME_SCALE,
            noise_octaves: DEFAULT_NOISE_OCTAVES,
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_FOREGROUND,
            halo: DEFAULT_HALO,
            resize_policy: ResizePolicy::default(),
        }
    }
}

impl NetworkConfig {
    /// Overlays a (possibly partial) JSON object on the defaults.
    ///
    /// Keys with the wrong type fall back to their default. The result is
    /// validated, and an unknown `resize_policy` name is an error.
    pub fn from_json(params: &Value) -> Result<Self, NetError> {
        let defaults = Self::default();
        let resize_policy = match params.get("resize_policy") {
            Some(Value::String(_)) => {
                param_string(params, "resize_policy", defaults.resize_policy.as_str()).parse()?
            }
            _ => defaults.resize_policy,
        };
        let config = Self {
            node_count: param_usize(params, "node_count", defaults.node_count),
            link_radius: param_f64(params, "link_radius", defaults.link_radius),
            base_node_size: param_f64(params, "base_node_size", defaults.base_node_size),
            degree_size_gain: param_f64(params, "degree_size_gain", defaults.degree_size_gain),
            hover_radius: param_f64(params, "hover_radius", defaults.hover_radius),
            drift_strength: param_f64(params, "drift_strength", defaults.drift_strength),
            noise_scale: param_f64(params, "noise_scale", defaults.noise_scale),
            noise_time_scale: param_f64(params, "noise_time_scale", defaults.noise_time_scale),
            noise_octaves: param_u32(params, "noise_octaves", defaults.noise_octaves),
            background: param_rgb(params, "background", defaults.background),
            foreground: param_rgb(params, "foreground", defaults.foreground),
            halo: param_rgb(params, "halo", defaults.halo),
            resize_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects radii, sizes and scales that are negative or not finite, and
    /// node counts above [`MAX_NODE_COUNT`].
    pub fn validate(&self) -> Result<(), NetError> {
        if self.node_count > MAX_NODE_COUNT {
            return Err(NetError::invalid_config(
                "node_count",
                format!("must be <= {MAX_NODE_COUNT}, got {}", self.node_count),
            ));
        }
        let non_negative = [
            ("link_radius", self.link_radius),
            ("base_node_size", self.base_node_size),
            ("degree_size_gain", self.degree_size_gain),
            ("hover_radius", self.hover_radius),
            ("drift_strength", self.drift_strength),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(NetError::invalid_config(
                    name,
                    format!("must be finite and >= 0, got {value}"),
                ));
            }
        }
        for (name, value) in [
            ("noise_scale", self.noise_scale),
            ("noise_time_scale", self.noise_time_scale),
        ] {
            if !value.is_finite() {
                return Err(NetError::invalid_config(
                    name,
                    format!("must be finite, got {value}"),
                ));
            }
        }
        if self.noise_octaves == 0 {
            return Err(NetError::invalid_config("noise_octaves", "must be >= 1"));
        }
        Ok(())
    }

    /// Current values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "node_count": self.node_count,
            "link_radius": self.link_radius,
            "base_node_size": self.base_node_size,
            "degree_size_gain": self.degree_size_gain,
            "hover_radius": self.hover_radius,
            "drift_strength": self.drift_strength,
            "noise_scale": self.noise_scale,
            "noise_time_scale": self.noise_time_scale,
            "noise_octaves": self.noise_octaves,
            "background": self.background,
            "foreground": self.foreground,
            "halo": self.halo,
            "resize_policy": self.resize_policy,
        })
    }

    /// Schema describing every parameter: type, default, range and meaning.
    pub fn param_schema() -> Value {
        json!({
            "node_count": {
                "type": "integer",
                "default": DEFAULT_NODE_COUNT,
                "min": 0,
                "max": MAX_NODE_COUNT,
                "description": "Number of nodes created at startup"
            },
            "link_radius": {
                "type": "number",
                "default": DEFAULT_LINK_RADIUS,
                "min": 0.0,
                "description": "Maximum distance (exclusive) for two nodes to be linked, in px"
            },
            "base_node_size": {
                "type": "number",
                "default": DEFAULT_BASE_NODE_SIZE,
                "min": 0.0,
                "description": "Diameter of an unlinked node, in px"
            },
            "degree_size_gain": {
                "type": "number",
                "default": DEFAULT_DEGREE_SIZE_GAIN,
                "min": 0.0,
                "description": "Diameter growth per sqrt(degree), capped at +4 px"
            },
            "hover_radius": {
                "type": "number",
                "default": DEFAULT_HOVER_RADIUS,
                "min": 0.0,
                "description": "Pointer influence radius, in px"
            },
            "drift_strength": {
                "type": "number",
                "default": DEFAULT_DRIFT_STRENGTH,
                "min": 0.0,
                "description": "Amplitude of the per-frame noise drift"
            },
            "noise_scale": {
                "type": "number",
                "default": DEFAULT_NOISE_SCALE,
                "description": "Spatial frequency of the drift noise"
            },
            "noise_time_scale": {
                "type": "number",
                "default": DEFAULT_NOISE_TIME_SCALE,
                "description": "Noise time units per elapsed millisecond"
            },
            "noise_octaves": {
                "type": "integer",
                "default": DEFAULT_NOISE_OCTAVES,
                "min": 1,
                "description": "Octaves summed by the drift noise"
            },
            "background": {
                "type": "rgb",
                "default": DEFAULT_BACKGROUND,
                "description": "Background fill color"
            },
            "foreground": {
                "type": "rgb",
                "default": DEFAULT_FOREGROUND,
                "description": "Base color for links and nodes"
            },
            "halo": {
                "type": "rgb",
                "default": DEFAULT_HALO,
                "description": "Color of the pointer-proximity halo"
            },
            "resize_policy": {
                "type": "string",
                "default": ResizePolicy::default().as_str(),
                "enum": ["preserve", "reinitialize"],
                "description": "Whether a resize keeps or re-scatters node positions"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let c = NetworkConfig::default();
        assert_eq!(c.node_count, 90);
        assert_eq!(c.link_radius, 120.0);
        assert_eq!(c.base_node_size, 2.4);
        assert_eq!(c.hover_radius, 110.0);
        assert_eq!(c.drift_strength, 0.45);
        assert_eq!(c.noise_scale, 0.0009);
        assert_eq!(c.noise_time_scale, 0.002);
        assert_eq!(c.background, Rgb::new(15, 17, 22));
        assert_eq!(c.foreground, Rgb::new(220, 224, 235));
        assert_eq!(c.resize_policy, ResizePolicy::Preserve);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn from_json_empty_object_yields_defaults() {
        let c = NetworkConfig::from_json(&json!({})).unwrap();
        assert_eq!(c, NetworkConfig::default());
    }

    #[test]
    fn from_json_overlays_given_keys() {
        let c = NetworkConfig::from_json(&json!({
            "node_count": 12,
            "link_radius": 60,
            "foreground": "#ffffff",
            "resize_policy": "reinitialize"
        }))
        .unwrap();
        assert_eq!(c.node_count, 12);
        assert_eq!(c.link_radius, 60.0);
        assert_eq!(c.foreground, Rgb::new(255, 255, 255));
        assert_eq!(c.resize_policy, ResizePolicy::Reinitialize);
        assert_eq!(c.hover_radius, 110.0);
    }

    #[test]
    fn from_json_rejects_negative_radius() {
        let err = NetworkConfig::from_json(&json!({"link_radius": -1.0})).unwrap_err();
        assert!(err.to_string().contains("link_radius"), "got: {err}");
    }

    #[test]
    fn from_json_rejects_unknown_policy() {
        let err = NetworkConfig::from_json(&json!({"resize_policy": "shuffle"})).unwrap_err();
        assert!(matches!(err, NetError::UnknownResizePolicy(_)));
    }

    #[test]
    fn validate_rejects_zero_octaves_and_nan_scale() {
        let c = NetworkConfig {
            noise_octaves: 0,
            ..NetworkConfig::default()
        };
        assert!(c.validate().is_err());
        let c = NetworkConfig {
            noise_scale: f64::NAN,
            ..NetworkConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn from_json_rejects_node_count_above_limit() {
        let err = NetworkConfig::from_json(&json!({"node_count": 1_000_000_000_000_000_000u64}))
            .unwrap_err();
        assert!(
            matches!(err, NetError::InvalidConfig { ref name, .. } if name == "node_count"),
            "got: {err}"
        );
        let at_limit = NetworkConfig {
            node_count: MAX_NODE_COUNT,
            ..NetworkConfig::default()
        };
        assert!(at_limit.validate().is_ok());
        assert_eq!(
            NetworkConfig::param_schema()["node_count"]["max"],
            json!(MAX_NODE_COUNT)
        );
    }

    #[test]
    fn zero_link_radius_is_valid() {
        let c = NetworkConfig {
            link_radius: 0.0,
            ..NetworkConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let original = NetworkConfig {
            node_count: 33,
            halo: Rgb::new(1, 2, 3),
            resize_policy: ResizePolicy::Reinitialize,
            ..NetworkConfig::default()
        };
        let restored = NetworkConfig::from_json(&original.to_json()).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn serde_fills_missing_fields_from_default() {
        let c: NetworkConfig = serde_json::from_str(r#"{"node_count": 5}"#).unwrap();
        assert_eq!(c.node_count, 5);
        assert_eq!(c.link_radius, 120.0);
    }

    #[test]
    fn param_schema_lists_every_json_key() {
        let schema = NetworkConfig::param_schema();
        let values = NetworkConfig::default().to_json();
        for key in values.as_object().unwrap().keys() {
            assert!(schema.get(key).is_some(), "schema missing {key}");
        }
    }

    #[test]
    fn resize_policy_parses_and_displays() {
        for policy in [ResizePolicy::Preserve, ResizePolicy::Reinitialize] {
            assert_eq!(policy.to_string().parse::<ResizePolicy>().unwrap(), policy);
        }
        assert!("nope".parse::<ResizePolicy>().is_err());
    }
}
