//! Glass surface
//!
//! Shared base for every glass component: holds the config, asks the engine
//! for styles and tracks the pointer for interactive surfaces. Surfaces with
//! `adaptive_opacity` follow the luminance the host samples behind them.

use vitrine_glass::{global_engine, GlassConfig, GlassStyle, Point, PointerSample, PointerTracker, Rect};

pub struct GlassSurface {
    pub config: GlassConfig,
    tracker: PointerTracker,
    sample: PointerSample,
    backdrop_luminance: Option<f32>,
}

impl GlassSurface {
    pub fn new(config: GlassConfig) -> Self {
        let tracker = PointerTracker::new(&config, global_engine().capabilities());
        Self {
            config,
            tracker,
            sample: PointerSample::rest(),
            backdrop_luminance: None,
        }
    }

    /// Glass style for this surface
    pub fn style(&self) -> GlassStyle {
        match self.backdrop_luminance {
            Some(luminance) => global_engine().generate_adaptive_glass_css(&self.config, luminance),
            None => global_engine().generate_glass_css(&self.config),
        }
    }

    /// Relative luminance of whatever is behind the surface, see
    /// `vitrine_glass::relative_luminance`
    pub fn set_backdrop_luminance(&mut self, luminance: f32) {
        self.backdrop_luminance = Some(luminance);
    }

    /// Glass declarations plus the current tilt transform
    pub fn inline_style(&self) -> String {
        format!(
            "{} transform: {};",
            self.style().to_css_declarations(),
            self.sample.transform
        )
    }

    /// Call after layout with the element's bounding rect
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.tracker.set_bounds(bounds);
    }

    /// Returns true when the surface needs a re-render
    pub fn pointer_move(&mut self, pointer: Point, now_ms: f64) -> bool {
        match self.tracker.track(pointer, now_ms) {
            Some(sample) if sample != self.sample => {
                self.sample = sample;
                true
            }
            _ => false,
        }
    }

    pub fn pointer_leave(&mut self) {
        self.sample = self.tracker.reset();
    }

    pub fn refraction(&self) -> f32 {
        self.sample.refraction
    }
}
