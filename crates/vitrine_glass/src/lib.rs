//! Vitrine Glass Engine
//!
//! The styling core of the Vitrine liquid glass kit. Everything here is a pure
//! calculation that hands back ready-to-apply CSS values:
//!
//! - **Refraction**: pointer proximity to an element's center as a `[0, 1]` lens
//!   intensity
//! - **Style Derivation**: blur, background, border and shadow for a
//!   [`GlassConfig`], downgraded for weak devices
//! - **Adaptive Backgrounds**: alpha that reacts to backdrop luminance
//! - **Device Capabilities**: one-time snapshot from an injected [`Environment`]
//! - **Color Utilities**: alpha rewriting for `rgba()` strings
//!
//! The engine owns no DOM state, timers or event subscriptions. Components
//! call it and apply what it returns.
//!
//! # Example
//!
//! ```rust
//! use vitrine_glass::{GlassConfig, GlassEngine, GlassVariant, HostEnvironment};
//!
//! let engine = GlassEngine::new(HostEnvironment::new().backdrop_filter(true));
//!
//! let config = GlassConfig::new()
//!     .variant(GlassVariant::Frosted)
//!     .interactive(true);
//!
//! let style = engine.generate_glass_css(&config);
//! assert_eq!(style.backdrop_filter, "blur(12px)");
//! assert_eq!(style.background, "rgba(255, 255, 255, 0.25)");
//! ```

pub mod adaptive;
pub mod capabilities;
pub mod color;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod refraction;
pub mod style;
pub mod tokens;
pub mod tracker;

pub use adaptive::{adaptive_alpha, get_adaptive_background, relative_luminance};
pub use capabilities::{
    detect_device_capabilities, DeviceCapabilities, Environment, HeadlessEnvironment,
    HostEnvironment, NetworkType, PerformanceLevel,
};
pub use color::{extract_alpha, with_alpha, ColorParseError, Rgba};
pub use config::{GlassConfig, GlassIntensity, GlassVariant, OpacityTier, ParseConfigError};
pub use engine::{global_engine, is_global_engine_initialized, set_global_engine, GlassEngine};
pub use geometry::{Point, Rect};
pub use refraction::calculate_refraction;
pub use style::{derive_glass_style, GlassStyle};
pub use tracker::{PointerSample, PointerTracker};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::capabilities::{DeviceCapabilities, HostEnvironment, PerformanceLevel};
    pub use crate::config::{GlassConfig, GlassIntensity, GlassVariant, OpacityTier};
    pub use crate::engine::{global_engine, GlassEngine};
    pub use crate::geometry::{Point, Rect};
    pub use crate::style::GlassStyle;
    pub use crate::tracker::PointerTracker;
}
