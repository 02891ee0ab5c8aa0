//! Pointer-proximity refraction
//!
//! The lens analogy: a pointer over the center of the surface bends the most
//! light, a pointer at a corner bends none. Intensity falls off with the square
//! of the normalized distance:
//!
//! ```text
//! normalized = min(|pointer - center| / |corner - center|, 1)
//! refraction = 1 - normalized²
//! ```

use crate::geometry::{Point, Rect};

/// Refraction intensity in `[0, 1]` for a pointer over `bounds`
///
/// Exactly `1.0` at the center, exactly `0.0` at (or beyond) a corner.
/// Zero-size bounds have no center to approach and yield `0.0`.
pub fn calculate_refraction(pointer: Point, bounds: Rect) -> f32 {
    let half_width = f64::from(bounds.width.max(0.0)) / 2.0;
    let half_height = f64::from(bounds.height.max(0.0)) / 2.0;
    let max_squared = half_width * half_width + half_height * half_height;
    if max_squared == 0.0 {
        return 0.0;
    }

    // Offsets from the origin first, so a pointer on the top-left corner
    // lands exactly on `-half_width, -half_height`
    let dx = f64::from(pointer.x - bounds.x) - half_width;
    let dy = f64::from(pointer.y - bounds.y) - half_height;
    let distance_squared = dx * dx + dy * dy;
    if distance_squared >= max_squared {
        return 0.0;
    }

    (1.0 - distance_squared / max_squared) as f32
}
