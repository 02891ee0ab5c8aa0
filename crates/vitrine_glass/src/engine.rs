//! The glass engine
//!
//! [`GlassEngine`] bundles the pure functions of this crate with a lazily
//! detected [`DeviceCapabilities`] snapshot. Hosts construct one at startup
//! and pass it to their components, or install it process-wide with
//! [`set_global_engine`].
//!
//! ```rust
//! use vitrine_glass::{GlassConfig, GlassEngine, Point, Rect};
//!
//! let engine = GlassEngine::headless();
//!
//! let style = engine.generate_glass_css(&GlassConfig::new());
//! assert_eq!(style.backdrop_filter, "blur(12px)");
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//! assert_eq!(engine.calculate_refraction(bounds.center(), bounds), 1.0);
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::adaptive::get_adaptive_background;
use crate::capabilities::{
    detect_device_capabilities, DeviceCapabilities, Environment, HeadlessEnvironment,
};
use crate::config::GlassConfig;
use crate::geometry::{Point, Rect};
use crate::refraction::calculate_refraction;
use crate::style::{derive_glass_style, GlassStyle};

/// Process-wide engine, see [`set_global_engine`]
static GLOBAL_ENGINE: OnceLock<GlassEngine> = OnceLock::new();

/// Install the process-wide engine
///
/// Call once at startup, before any component asks for [`global_engine`].
/// Returns the engine back if one was already installed (or already created
/// on demand by [`global_engine`]).
pub fn set_global_engine(engine: GlassEngine) -> Result<(), GlassEngine> {
    GLOBAL_ENGINE.set(engine)
}

/// The process-wide engine
///
/// Falls back to a headless engine if the host never installed one.
pub fn global_engine() -> &'static GlassEngine {
    GLOBAL_ENGINE.get_or_init(GlassEngine::headless)
}

/// Check whether a process-wide engine exists yet
pub fn is_global_engine_initialized() -> bool {
    GLOBAL_ENGINE.get().is_some()
}

/// Style calculator with a cached device capability snapshot
pub struct GlassEngine {
    environment: Box<dyn Environment>,
    capabilities: OnceLock<DeviceCapabilities>,
}

impl GlassEngine {
    /// Create an engine that probes `environment` on first use
    pub fn new(environment: impl Environment + 'static) -> Self {
        Self {
            environment: Box::new(environment),
            capabilities: OnceLock::new(),
        }
    }

    /// Engine for non-interactive hosts
    pub fn headless() -> Self {
        Self::new(HeadlessEnvironment)
    }

    /// Engine with a snapshot the host already computed
    pub fn with_capabilities(capabilities: DeviceCapabilities) -> Self {
        Self {
            environment: Box::new(HeadlessEnvironment),
            capabilities: OnceLock::from(capabilities),
        }
    }

    /// Device capabilities, detected on the first call
    pub fn capabilities(&self) -> &DeviceCapabilities {
        self.capabilities
            .get_or_init(|| detect_device_capabilities(self.environment.as_ref()))
    }

    /// Refraction intensity in `[0, 1]`, see [`calculate_refraction`]
    pub fn calculate_refraction(&self, pointer: Point, bounds: Rect) -> f32 {
        calculate_refraction(pointer, bounds)
    }

    /// Style record for `config` on this engine's device
    pub fn generate_glass_css(&self, config: &GlassConfig) -> GlassStyle {
        derive_glass_style(config, self.capabilities())
    }

    /// Style record that follows the backdrop luminance
    ///
    /// With `adaptive_opacity` set on the config, the background is replaced
    /// by [`get_adaptive_background`] for `background_luminance`. Devices
    /// without backdrop-filter keep their opaque fallback background, as does
    /// a config with the flag unset.
    pub fn generate_adaptive_glass_css(
        &self,
        config: &GlassConfig,
        background_luminance: f32,
    ) -> GlassStyle {
        let mut style = self.generate_glass_css(config);
        if config.adaptive_opacity && self.capabilities().supports_backdrop_filter {
            style.background = get_adaptive_background(config, background_luminance);
        }
        style
    }

    /// Luminance-adapted variant background, see [`get_adaptive_background`]
    pub fn get_adaptive_background(&self, config: &GlassConfig, background_luminance: f32) -> String {
        get_adaptive_background(config, background_luminance)
    }
}

impl Default for GlassEngine {
    fn default() -> Self {
        Self::headless()
    }
}

impl fmt::Debug for GlassEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlassEngine")
            .field("capabilities", &self.capabilities.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{HostEnvironment, PerformanceLevel};
    use crate::color::extract_alpha;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts how many times detection actually probes
    struct CountingEnvironment {
        probes: Arc<AtomicUsize>,
    }

    impl Environment for CountingEnvironment {
        fn is_interactive(&self) -> bool {
            true
        }

        fn supports_backdrop_filter(&self) -> Option<bool> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            Some(true)
        }

        fn prefers_reduced_motion(&self) -> Option<bool> {
            None
        }

        fn device_memory_gb(&self) -> Option<f32> {
            None
        }

        fn network_type(&self) -> Option<crate::capabilities::NetworkType> {
            None
        }
    }

    #[test]
    fn test_end_to_end_frosted() {
        let engine = GlassEngine::new(HostEnvironment::new().backdrop_filter(true));
        let config = GlassConfig::new()
            .variant("frosted")
            .intensity("regular")
            .opacity("regular")
            .interactive(true);

        let style = engine.generate_glass_css(&config);
        assert_eq!(engine.capabilities().performance_level, PerformanceLevel::Medium);
        assert_eq!(style.backdrop_filter, "blur(12px)");
        assert_eq!(style.background, "rgba(255, 255, 255, 0.25)");
    }

    #[test]
    fn test_capabilities_detected_once() {
        let probes = Arc::new(AtomicUsize::new(0));
        let engine = GlassEngine::new(CountingEnvironment {
            probes: probes.clone(),
        });

        let config = GlassConfig::new();
        let first = engine.generate_glass_css(&config);
        for _ in 0..10 {
            assert_eq!(engine.generate_glass_css(&config), first);
        }
        assert_eq!(probes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_capabilities_skips_detection() {
        let engine = GlassEngine::with_capabilities(DeviceCapabilities {
            supports_backdrop_filter: false,
            performance_level: PerformanceLevel::Low,
            reduced_motion: true,
        });

        let style = engine.generate_glass_css(&GlassConfig::new());
        assert_eq!(style.backdrop_filter, "blur(5px)");
        assert!(style.box_shadow.is_none());
        assert!(extract_alpha(&style.background) > 0.25);
    }

    #[test]
    fn test_global_engine_defaults_to_headless() {
        let engine = global_engine();
        assert!(is_global_engine_initialized());
        assert_eq!(*engine.capabilities(), DeviceCapabilities::HEADLESS);
        assert!(set_global_engine(GlassEngine::headless()).is_err());
    }

    #[test]
    fn test_adaptive_style_follows_flag() {
        let engine = GlassEngine::headless();

        let fixed = GlassConfig::new();
        for luminance in [0.0, 0.9] {
            assert_eq!(
                engine.generate_adaptive_glass_css(&fixed, luminance),
                engine.generate_glass_css(&fixed)
            );
        }

        let adaptive = GlassConfig::new().adaptive_opacity(true);
        let bright = engine.generate_adaptive_glass_css(&adaptive, 0.9);
        let dark = engine.generate_adaptive_glass_css(&adaptive, 0.1);
        assert_eq!(bright.background, "rgba(255, 255, 255, 0.2)");
        assert_eq!(dark.background, "rgba(255, 255, 255, 0.3)");
        assert_eq!(bright.backdrop_filter, engine.generate_glass_css(&adaptive).backdrop_filter);
        assert_eq!(bright.border, engine.generate_glass_css(&adaptive).border);
    }

    #[test]
    fn test_adaptive_style_keeps_fallback_background() {
        let engine = GlassEngine::with_capabilities(DeviceCapabilities {
            supports_backdrop_filter: false,
            performance_level: PerformanceLevel::Medium,
            reduced_motion: false,
        });
        let config = GlassConfig::new().adaptive_opacity(true);
        assert_eq!(
            engine.generate_adaptive_glass_css(&config, 0.9),
            engine.generate_glass_css(&config)
        );
    }

    #[test]
    fn test_adaptive_delegates() {
        let engine = GlassEngine::headless();
        let config = GlassConfig::new().adaptive_opacity(true);
        assert_eq!(
            engine.get_adaptive_background(&config, 1.0),
            "rgba(255, 255, 255, 0.2)"
        );
    }
}
