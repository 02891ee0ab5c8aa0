//! Luminance-adaptive backgrounds
//!
//! Over a bright backdrop the glass thins out so more of it shows through;
//! over a dark backdrop it thickens for contrast.

use crate::color::{extract_alpha, with_alpha};
use crate::config::GlassConfig;
use crate::tokens;

/// Relative luminance of an sRGB color, in `[0, 1]`
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    fn linearize(channel: u8) -> f32 {
        let c = channel as f32 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Variant background with its alpha scaled for the backdrop luminance
///
/// Luminance above 0.5 scales the variant's base alpha by 0.8, anything else
/// by 1.2. The result is clamped to `[0, 1]`.
pub fn get_adaptive_background(config: &GlassConfig, background_luminance: f32) -> String {
    let base = tokens::variant_background(config.variant);
    with_alpha(base, adaptive_alpha(extract_alpha(base), background_luminance))
}

/// Scale `base_alpha` for the backdrop luminance
///
/// Rounded to thousandths and clamped to `[0, 1]`.
pub fn adaptive_alpha(base_alpha: f32, background_luminance: f32) -> f32 {
    let scale = if background_luminance > tokens::BRIGHT_BACKGROUND_THRESHOLD {
        tokens::BRIGHT_BACKGROUND_ALPHA_SCALE
    } else {
        tokens::DARK_BACKGROUND_ALPHA_SCALE
    };

    tokens::round_alpha(base_alpha * scale).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlassVariant;

    #[test]
    fn test_relative_luminance_extremes() {
        assert_eq!(relative_luminance(0, 0, 0), 0.0);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_relative_luminance_weights() {
        let green = relative_luminance(0, 255, 0);
        let red = relative_luminance(255, 0, 0);
        let blue = relative_luminance(0, 0, 255);
        assert!((green - 0.7152).abs() < 1e-4);
        assert!((red - 0.2126).abs() < 1e-4);
        assert!((blue - 0.0722).abs() < 1e-4);
    }

    #[test]
    fn test_bright_background_thins_glass() {
        let config = GlassConfig::new();
        // frosted base alpha 0.25 * 0.8
        assert_eq!(
            get_adaptive_background(&config, 0.9),
            "rgba(255, 255, 255, 0.2)"
        );
    }

    #[test]
    fn test_dark_background_thickens_glass() {
        let config = GlassConfig::new();
        // frosted base alpha 0.25 * 1.2
        assert_eq!(
            get_adaptive_background(&config, 0.1),
            "rgba(255, 255, 255, 0.3)"
        );
        // exactly 0.5 is not "bright"
        assert_eq!(
            get_adaptive_background(&config, 0.5),
            "rgba(255, 255, 255, 0.3)"
        );
    }

    #[test]
    fn test_uses_variant_base_color() {
        let config = GlassConfig::new().variant(GlassVariant::Dark);
        assert_eq!(get_adaptive_background(&config, 0.0), "rgba(0, 0, 0, 0.48)");
    }

    #[test]
    fn test_adaptive_alpha_clamps_high_base() {
        // 0.9 * 1.2 would be 1.08
        assert_eq!(adaptive_alpha(0.9, 0.1), 1.0);
        assert!((adaptive_alpha(0.9, 0.9) - 0.72).abs() < 1e-6);
    }

    #[test]
    fn test_alpha_is_clamped() {
        for variant in GlassVariant::ALL {
            let config = GlassConfig::new().variant(variant);
            for luminance in [-1.0, 0.0, 0.25, 0.75, 1.0, 2.0] {
                let alpha = extract_alpha(&get_adaptive_background(&config, luminance));
                assert!((0.0..=1.0).contains(&alpha));
            }
        }
    }
}
