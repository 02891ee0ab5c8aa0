//! Throttled pointer tracking for interactive glass
//!
//! Pointer-move events arrive far faster than a frame. [`PointerTracker`]
//! drops samples that land inside the throttle window (16ms by default) and
//! turns the rest into a refraction value plus a tilt transform.
//!
//! The tracker has no clock; the host passes event timestamps in.

use crate::capabilities::DeviceCapabilities;
use crate::config::GlassConfig;
use crate::geometry::{Point, Rect};
use crate::refraction::calculate_refraction;
use crate::tokens;

/// Transform applied when motion is disabled or the pointer left
pub const NO_TRANSFORM: &str = "none";

/// One accepted pointer sample
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Refraction in `[0, 1]`
    pub refraction: f32,
    /// CSS `transform` value for the surface
    pub transform: String,
}

impl PointerSample {
    /// Sample for a surface at rest
    pub fn rest() -> Self {
        Self {
            refraction: 0.0,
            transform: NO_TRANSFORM.to_string(),
        }
    }
}

/// Per-element pointer state
#[derive(Clone, Debug)]
pub struct PointerTracker {
    bounds: Rect,
    interactive: bool,
    reduced_motion: bool,
    throttle_ms: f64,
    last_sample_ms: Option<f64>,
}

impl PointerTracker {
    pub fn new(config: &GlassConfig, capabilities: &DeviceCapabilities) -> Self {
        Self {
            bounds: Rect::ZERO,
            interactive: config.interactive,
            reduced_motion: capabilities.reduced_motion,
            throttle_ms: tokens::POINTER_THROTTLE_MS,
            last_sample_ms: None,
        }
    }

    /// Override the sampling interval
    pub fn with_throttle_ms(mut self, throttle_ms: f64) -> Self {
        self.throttle_ms = throttle_ms.max(0.0);
        self
    }

    /// Update the element bounds (after layout or resize)
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Feed a pointer-move event
    ///
    /// Returns `None` when the surface is not interactive or the event falls
    /// inside the throttle window.
    pub fn track(&mut self, pointer: Point, now_ms: f64) -> Option<PointerSample> {
        if !self.interactive {
            return None;
        }
        if let Some(last) = self.last_sample_ms {
            if now_ms - last < self.throttle_ms {
                return None;
            }
        }
        self.last_sample_ms = Some(now_ms);

        let refraction = calculate_refraction(pointer, self.bounds);
        let transform = if self.reduced_motion {
            NO_TRANSFORM.to_string()
        } else {
            tilt_transform(pointer, self.bounds, refraction)
        };

        Some(PointerSample {
            refraction,
            transform,
        })
    }

    /// Pointer left the element; the next event is never throttled
    pub fn reset(&mut self) -> PointerSample {
        self.last_sample_ms = None;
        PointerSample::rest()
    }
}

/// Perspective tilt towards the pointer, scaled by refraction
pub fn tilt_transform(pointer: Point, bounds: Rect, refraction: f32) -> String {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return NO_TRANSFORM.to_string();
    }

    let center = bounds.center();
    let dx = ((pointer.x - center.x) / (bounds.width / 2.0)).clamp(-1.0, 1.0);
    let dy = ((pointer.y - center.y) / (bounds.height / 2.0)).clamp(-1.0, 1.0);

    let rotate_x = -dy * tokens::MAX_TILT_DEGREES * refraction;
    let rotate_y = dx * tokens::MAX_TILT_DEGREES * refraction;

    // `+ 0.0` turns -0.0 into 0.0 so a centered pointer prints `0.00deg`
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        tokens::TILT_PERSPECTIVE_PX,
        rotate_x + 0.0,
        rotate_y + 0.0
    )
}
