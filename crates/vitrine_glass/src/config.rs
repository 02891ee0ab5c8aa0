//! Glass configuration
//!
//! Every enum here has two parse paths:
//!
//! - [`FromStr`] is strict and reports unknown names as [`ParseConfigError`]
//! - `from_name` / `From<&str>` / serde are lossy and substitute the default
//!
//! The engine only ever sees already-parsed enums, so the lossy path is where
//! the "unknown variant renders as frosted" behavior lives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Strict parse failure for a configuration name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseConfigError {
    #[error("unknown glass variant `{0}` (expected clear, frosted, tinted or dark)")]
    Variant(String),

    #[error("unknown glass intensity `{0}` (expected light, subtle, regular or strong)")]
    Intensity(String),

    #[error("unknown opacity tier `{0}` (expected light, regular, medium or strong)")]
    Opacity(String),
}

/// Implements the lossy string conversions shared by all config enums
macro_rules! lossy_name_conversions {
    ($ty:ident) => {
        impl From<&str> for $ty {
            fn from(name: &str) -> Self {
                $ty::from_name(name)
            }
        }

        impl From<String> for $ty {
            fn from(name: String) -> Self {
                $ty::from_name(&name)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Visual preset family for a glass surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GlassVariant {
    /// Barely-there white tint, no border
    Clear,
    /// Classic white frosted glass
    #[default]
    Frosted,
    /// Blue accent tint
    Tinted,
    /// Smoked glass for light backgrounds
    Dark,
}

impl GlassVariant {
    pub const ALL: [GlassVariant; 4] = [
        GlassVariant::Clear,
        GlassVariant::Frosted,
        GlassVariant::Tinted,
        GlassVariant::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GlassVariant::Clear => "clear",
            GlassVariant::Frosted => "frosted",
            GlassVariant::Tinted => "tinted",
            GlassVariant::Dark => "dark",
        }
    }

    /// Lossy lookup: unknown names fall back to [`GlassVariant::Frosted`]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            trace!("{}; using frosted", err);
            GlassVariant::default()
        })
    }
}

impl FromStr for GlassVariant {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(GlassVariant::Clear),
            "frosted" => Ok(GlassVariant::Frosted),
            "tinted" => Ok(GlassVariant::Tinted),
            "dark" => Ok(GlassVariant::Dark),
            _ => Err(ParseConfigError::Variant(s.to_string())),
        }
    }
}

lossy_name_conversions!(GlassVariant);

/// Blur radius tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GlassIntensity {
    /// Smallest blur; also accepted as `subtle`
    Light,
    #[default]
    Regular,
    Strong,
}

impl GlassIntensity {
    pub const ALL: [GlassIntensity; 3] = [
        GlassIntensity::Light,
        GlassIntensity::Regular,
        GlassIntensity::Strong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GlassIntensity::Light => "light",
            GlassIntensity::Regular => "regular",
            GlassIntensity::Strong => "strong",
        }
    }

    /// Lossy lookup: unknown names fall back to [`GlassIntensity::Regular`]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            trace!("{}; using regular", err);
            GlassIntensity::default()
        })
    }
}

impl FromStr for GlassIntensity {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "subtle" => Ok(GlassIntensity::Light),
            "regular" => Ok(GlassIntensity::Regular),
            "strong" => Ok(GlassIntensity::Strong),
            _ => Err(ParseConfigError::Intensity(s.to_string())),
        }
    }
}

lossy_name_conversions!(GlassIntensity);

/// Background alpha tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OpacityTier {
    Light,
    #[default]
    Regular,
    Medium,
    Strong,
}

impl OpacityTier {
    pub const ALL: [OpacityTier; 4] = [
        OpacityTier::Light,
        OpacityTier::Regular,
        OpacityTier::Medium,
        OpacityTier::Strong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpacityTier::Light => "light",
            OpacityTier::Regular => "regular",
            OpacityTier::Medium => "medium",
            OpacityTier::Strong => "strong",
        }
    }

    /// Lossy lookup: unknown names fall back to [`OpacityTier::Regular`]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            trace!("{}; using regular", err);
            OpacityTier::default()
        })
    }
}

impl FromStr for OpacityTier {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(OpacityTier::Light),
            "regular" => Ok(OpacityTier::Regular),
            "medium" => Ok(OpacityTier::Medium),
            "strong" => Ok(OpacityTier::Strong),
            _ => Err(ParseConfigError::Opacity(s.to_string())),
        }
    }
}

lossy_name_conversions!(OpacityTier);

/// Declarative configuration for one glass surface
///
/// Owned by the caller and passed by reference on every call; the engine
/// never keeps it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlassConfig {
    pub variant: GlassVariant,
    pub intensity: GlassIntensity,
    pub opacity: OpacityTier,
    /// Pointer-driven refraction and tilt are active
    pub interactive: bool,
    /// Background luminance modulates the surface alpha
    pub adaptive_opacity: bool,
    /// Reserved; carried through untouched
    pub environment_blending: bool,
}

impl GlassConfig {
    /// Create a config with all defaults (frosted / regular / regular)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<GlassVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn intensity(mut self, intensity: impl Into<GlassIntensity>) -> Self {
        self.intensity = intensity.into();
        self
    }

    pub fn opacity(mut self, opacity: impl Into<OpacityTier>) -> Self {
        self.opacity = opacity.into();
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn adaptive_opacity(mut self, adaptive: bool) -> Self {
        self.adaptive_opacity = adaptive;
        self
    }

    pub fn environment_blending(mut self, blending: bool) -> Self {
        self.environment_blending = blending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!("Tinted".parse::<GlassVariant>(), Ok(GlassVariant::Tinted));
        assert_eq!("subtle".parse::<GlassIntensity>(), Ok(GlassIntensity::Light));
        assert_eq!(
            "huge".parse::<OpacityTier>(),
            Err(ParseConfigError::Opacity("huge".to_string()))
        );
    }

    #[test]
    fn test_lossy_parse_defaults() {
        assert_eq!(GlassVariant::from_name("nonexistent"), GlassVariant::Frosted);
        assert_eq!(GlassIntensity::from_name(""), GlassIntensity::Regular);
        assert_eq!(OpacityTier::from_name("opaque"), OpacityTier::Regular);
    }

    #[test]
    fn test_builder() {
        let config = GlassConfig::new()
            .variant("dark")
            .intensity(GlassIntensity::Strong)
            .opacity("medium")
            .interactive(true);

        assert_eq!(config.variant, GlassVariant::Dark);
        assert_eq!(config.intensity, GlassIntensity::Strong);
        assert_eq!(config.opacity, OpacityTier::Medium);
        assert!(config.interactive);
        assert!(!config.adaptive_opacity);
    }

    #[test]
    fn test_deserialize_unknown_names() {
        let config: GlassConfig = serde_json::from_str(
            r#"{"variant": "nonexistent", "intensity": "subtle", "adaptiveOpacity": true}"#,
        )
        .unwrap();

        assert_eq!(config.variant, GlassVariant::Frosted);
        assert_eq!(config.intensity, GlassIntensity::Light);
        assert_eq!(config.opacity, OpacityTier::Regular);
        assert!(config.adaptive_opacity);
    }

    #[test]
    fn test_serialize_names() {
        let config = GlassConfig::new().variant(GlassVariant::Clear);
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("variant = \"clear\""));
        assert!(toml.contains("adaptiveOpacity = false"));
    }
}
