//! Glass design tokens
//!
//! Static lookup tables consumed by style derivation. Each table is an
//! exhaustive `match` over the config enums so a new variant cannot be added
//! without giving it a row.

use crate::config::{GlassIntensity, GlassVariant, OpacityTier};

/// Blur radius in px for an intensity tier
pub fn blur_radius(intensity: GlassIntensity) -> f32 {
    match intensity {
        GlassIntensity::Light => 5.0,
        GlassIntensity::Regular => 12.0,
        GlassIntensity::Strong => 20.0,
    }
}

/// Blur used whenever the device is classified as low performance
pub const LOW_PERFORMANCE_BLUR: f32 = 5.0;

/// Background alpha for an opacity tier
pub fn tier_alpha(opacity: OpacityTier) -> f32 {
    match opacity {
        OpacityTier::Light => 0.15,
        OpacityTier::Regular => 0.25,
        OpacityTier::Medium => 0.45,
        OpacityTier::Strong => 0.85,
    }
}

/// Base background color of a variant, with its default alpha baked in
pub fn variant_background(variant: GlassVariant) -> &'static str {
    match variant {
        GlassVariant::Clear => "rgba(255, 255, 255, 0.1)",
        GlassVariant::Frosted => "rgba(255, 255, 255, 0.25)",
        GlassVariant::Tinted => "rgba(59, 130, 246, 0.2)",
        GlassVariant::Dark => "rgba(0, 0, 0, 0.4)",
    }
}

/// Background color used when backdrop blur is unavailable
///
/// The alpha is supplied by the caller from the boosted tier alpha.
pub fn variant_fallback_background(variant: GlassVariant) -> &'static str {
    match variant {
        GlassVariant::Clear => "rgb(250, 250, 252)",
        GlassVariant::Frosted => "rgb(245, 245, 247)",
        GlassVariant::Tinted => "rgb(219, 234, 254)",
        GlassVariant::Dark => "rgb(28, 28, 30)",
    }
}

/// Multiplier applied to the tier alpha in the no-backdrop fallback
pub const FALLBACK_ALPHA_BOOST: f32 = 1.5;

/// Upper bound for the boosted fallback alpha
pub const FALLBACK_ALPHA_MAX: f32 = 0.95;

/// Keep a derived alpha to thousandths, so `0.15 * 1.5` reads `0.225`
pub fn round_alpha(alpha: f32) -> f32 {
    (alpha * 1000.0).round() / 1000.0
}

/// Hairline border alpha by intensity; `None` means the variant has no border
pub fn border_alpha(variant: GlassVariant, intensity: GlassIntensity) -> Option<f32> {
    if variant == GlassVariant::Clear {
        return None;
    }
    Some(match intensity {
        GlassIntensity::Light => 0.1,
        GlassIntensity::Regular => 0.18,
        GlassIntensity::Strong => 0.3,
    })
}

/// Drop shadow by opacity tier
pub fn shadow(opacity: OpacityTier) -> &'static str {
    match opacity {
        OpacityTier::Light => "0 4px 16px rgba(0, 0, 0, 0.08)",
        OpacityTier::Regular => "0 8px 32px rgba(0, 0, 0, 0.12)",
        OpacityTier::Medium => "0 12px 40px rgba(0, 0, 0, 0.18)",
        OpacityTier::Strong => "0 16px 48px rgba(0, 0, 0, 0.25)",
    }
}

/// Luminance above which the backdrop counts as bright
pub const BRIGHT_BACKGROUND_THRESHOLD: f32 = 0.5;

/// Alpha multiplier over bright backdrops
pub const BRIGHT_BACKGROUND_ALPHA_SCALE: f32 = 0.8;

/// Alpha multiplier over dark backdrops
pub const DARK_BACKGROUND_ALPHA_SCALE: f32 = 1.2;

/// Maximum tilt in degrees at full refraction
pub const MAX_TILT_DEGREES: f32 = 10.0;

/// Perspective distance for the tilt transform
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

/// Pointer sampling interval (one frame at 60fps)
pub const POINTER_THROTTLE_MS: f64 = 16.0;
