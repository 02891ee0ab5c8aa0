//! Style derivation
//!
//! Maps a [`GlassConfig`] and a [`DeviceCapabilities`] snapshot to a
//! [`GlassStyle`]: ready-to-apply CSS values for one glass surface.
//!
//! # Rules
//!
//! 1. Blur comes from the intensity tier. Low performance devices always get
//!    the lightest blur.
//! 2. Background is the variant color with its alpha replaced by the opacity
//!    tier alpha.
//! 3. Every variant except `clear` gets a white hairline border whose alpha
//!    follows the intensity.
//! 4. Shadow follows the opacity tier and is dropped on low performance
//!    devices.
//! 5. Without backdrop-filter support the background is swapped for the
//!    variant's fallback color at `min(tier_alpha * 1.5, 0.95)`. The blur is
//!    still emitted.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::capabilities::DeviceCapabilities;
use crate::color::with_alpha;
use crate::config::GlassConfig;
use crate::tokens;

/// CSS values for one glass surface
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassStyle {
    /// `backdrop-filter` value, e.g. `blur(12px)`
    pub backdrop_filter: String,
    /// `background` value
    pub background: String,
    /// `border` value, absent for borderless variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// `box-shadow` value, absent on low performance devices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl GlassStyle {
    /// `property: value;` pairs in a stable order
    ///
    /// `backdrop-filter` is emitted together with its `-webkit-` twin.
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        let mut decls = vec![
            ("backdrop-filter", self.backdrop_filter.as_str()),
            ("-webkit-backdrop-filter", self.backdrop_filter.as_str()),
            ("background", self.background.as_str()),
        ];
        if let Some(border) = &self.border {
            decls.push(("border", border.as_str()));
        }
        if let Some(shadow) = &self.box_shadow {
            decls.push(("box-shadow", shadow.as_str()));
        }
        decls
    }

    /// Inline style string, e.g. for a `style="..."` attribute
    pub fn to_css_declarations(&self) -> String {
        self.declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A full rule block for `selector`
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (property, value) in self.declarations() {
            css.push_str(&format!("  {property}: {value};\n"));
        }
        css.push('}');
        css
    }
}

/// Derive the style for `config` on a device described by `capabilities`
pub fn derive_glass_style(config: &GlassConfig, capabilities: &DeviceCapabilities) -> GlassStyle {
    let low_performance = capabilities.is_low_performance();

    let blur = if low_performance {
        tokens::LOW_PERFORMANCE_BLUR
    } else {
        tokens::blur_radius(config.intensity)
    };

    let alpha = tokens::tier_alpha(config.opacity);
    let background = if capabilities.supports_backdrop_filter {
        with_alpha(tokens::variant_background(config.variant), alpha)
    } else {
        let boosted =
            tokens::round_alpha(alpha * tokens::FALLBACK_ALPHA_BOOST).min(tokens::FALLBACK_ALPHA_MAX);
        trace!(
            "no backdrop-filter support, {} fallback background at alpha {}",
            config.variant,
            boosted
        );
        with_alpha(tokens::variant_fallback_background(config.variant), boosted)
    };

    let border = tokens::border_alpha(config.variant, config.intensity)
        .map(|alpha| format!("1px solid {}", with_alpha("rgba(255, 255, 255, 1)", alpha)));

    let box_shadow = if low_performance {
        None
    } else {
        Some(tokens::shadow(config.opacity).to_string())
    };

    GlassStyle {
        backdrop_filter: format!("blur({}px)", blur),
        background,
        border,
        box_shadow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::PerformanceLevel;
    use crate::color::extract_alpha;
    use crate::config::{GlassIntensity, GlassVariant, OpacityTier};

    fn caps(backdrop: bool, performance: PerformanceLevel) -> DeviceCapabilities {
        DeviceCapabilities {
            supports_backdrop_filter: backdrop,
            performance_level: performance,
            reduced_motion: false,
        }
    }

    #[test]
    fn test_frosted_regular() {
        let style = derive_glass_style(&GlassConfig::new(), &DeviceCapabilities::HEADLESS);

        assert_eq!(style.backdrop_filter, "blur(12px)");
        assert_eq!(style.background, "rgba(255, 255, 255, 0.25)");
        assert_eq!(
            style.border.as_deref(),
            Some("1px solid rgba(255, 255, 255, 0.18)")
        );
        assert_eq!(
            style.box_shadow.as_deref(),
            Some("0 8px 32px rgba(0, 0, 0, 0.12)")
        );
    }

    #[test]
    fn test_blur_tiers() {
        let headless = DeviceCapabilities::HEADLESS;
        let blur = |intensity: GlassIntensity| {
            derive_glass_style(&GlassConfig::new().intensity(intensity), &headless).backdrop_filter
        };
        assert_eq!(blur(GlassIntensity::Light), "blur(5px)");
        assert_eq!(blur(GlassIntensity::Regular), "blur(12px)");
        assert_eq!(blur(GlassIntensity::Strong), "blur(20px)");
    }

    #[test]
    fn test_opacity_tiers_rewrite_variant_alpha() {
        let headless = DeviceCapabilities::HEADLESS;
        for (tier, expected) in [
            (OpacityTier::Light, 0.15),
            (OpacityTier::Regular, 0.25),
            (OpacityTier::Medium, 0.45),
            (OpacityTier::Strong, 0.85),
        ] {
            let style = derive_glass_style(
                &GlassConfig::new().variant(GlassVariant::Tinted).opacity(tier),
                &headless,
            );
            assert!(style.background.starts_with("rgba(59, 130, 246, "));
            assert_eq!(extract_alpha(&style.background), expected);
        }
    }

    #[test]
    fn test_clear_has_no_border() {
        let style = derive_glass_style(
            &GlassConfig::new().variant(GlassVariant::Clear),
            &DeviceCapabilities::HEADLESS,
        );
        assert_eq!(style.border, None);
    }

    #[test]
    fn test_low_performance_override() {
        let low = caps(true, PerformanceLevel::Low);
        for tier in OpacityTier::ALL {
            let config = GlassConfig::new()
                .intensity(GlassIntensity::Strong)
                .opacity(tier);
            let style = derive_glass_style(&config, &low);
            assert_eq!(style.backdrop_filter, "blur(5px)");
            assert_eq!(style.box_shadow, None);
        }
    }

    #[test]
    fn test_no_backdrop_fallback() {
        let unsupported = caps(false, PerformanceLevel::Medium);
        for variant in GlassVariant::ALL {
            for tier in OpacityTier::ALL {
                let config = GlassConfig::new().variant(variant).opacity(tier);
                let supported = derive_glass_style(&config, &DeviceCapabilities::HEADLESS);
                let fallback = derive_glass_style(&config, &unsupported);

                let base = tokens::tier_alpha(tier);
                let alpha = extract_alpha(&fallback.background);
                assert!(alpha >= base);
                assert!(alpha <= tokens::FALLBACK_ALPHA_MAX);
                assert_ne!(fallback.background, supported.background);
                assert_eq!(fallback.backdrop_filter, supported.backdrop_filter);
            }
        }
    }

    #[test]
    fn test_fallback_alpha_boost_prints_cleanly() {
        let unsupported = caps(false, PerformanceLevel::Medium);
        let style = derive_glass_style(&GlassConfig::new().opacity(OpacityTier::Light), &unsupported);
        assert_eq!(style.background, "rgba(245, 245, 247, 0.225)");

        let style = derive_glass_style(&GlassConfig::new().opacity(OpacityTier::Medium), &unsupported);
        assert_eq!(style.background, "rgba(245, 245, 247, 0.675)");
    }

    #[test]
    fn test_fallback_alpha_cap() {
        let style = derive_glass_style(
            &GlassConfig::new().opacity(OpacityTier::Strong),
            &caps(false, PerformanceLevel::High),
        );
        assert_eq!(style.background, "rgba(245, 245, 247, 0.95)");
    }

    #[test]
    fn test_unknown_variant_matches_frosted() {
        let headless = DeviceCapabilities::HEADLESS;
        let unknown = GlassConfig::new()
            .variant("nonexistent")
            .intensity("regular")
            .opacity("regular");
        let frosted = GlassConfig::new().variant(GlassVariant::Frosted);

        assert_eq!(
            derive_glass_style(&unknown, &headless),
            derive_glass_style(&frosted, &headless)
        );
    }

    #[test]
    fn test_deterministic() {
        let config = GlassConfig::new().variant("dark").opacity("medium");
        let caps = caps(false, PerformanceLevel::High);
        let a = derive_glass_style(&config, &caps);
        let b = derive_glass_style(&config, &caps);
        assert_eq!(a, b);
        assert_eq!(a.to_css_declarations(), b.to_css_declarations());
    }

    #[test]
    fn test_css_output() {
        let style = derive_glass_style(
            &GlassConfig::new().variant(GlassVariant::Clear),
            &caps(true, PerformanceLevel::Low),
        );
        assert_eq!(
            style.to_css_declarations(),
            "backdrop-filter: blur(5px); -webkit-backdrop-filter: blur(5px); \
             background: rgba(255, 255, 255, 0.25);"
        );
        assert_eq!(
            style.to_css_rule(".glass"),
            ".glass {\n  backdrop-filter: blur(5px);\n  -webkit-backdrop-filter: blur(5px);\n  background: rgba(255, 255, 255, 0.25);\n}"
        );
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let style = derive_glass_style(
            &GlassConfig::new().variant(GlassVariant::Clear),
            &caps(true, PerformanceLevel::Low),
        );
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["backdropFilter"], "blur(5px)");
        assert!(json.get("border").is_none());
        assert!(json.get("boxShadow").is_none());
    }
}
