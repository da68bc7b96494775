//! Pointer-distance magnification.
//!
//! Each item's target scale is a function of the Euclidean distance from
//! the pointer to the item's resting center, shaped by a cosine falloff:
//! flat near the cursor, so the item under the pointer doesn't jitter, and
//! easing smoothly to zero at the effect radius, so there is no visible
//! seam where magnification begins.

use std::f64::consts::FRAC_PI_2;

use kinetic::Point;

/// Cosine falloff over a normalized distance.
///
/// `t = 0` maps to 1, `t = 1` maps to 0; inputs outside `[0, 1]` are
/// clamped.
#[must_use]
pub fn falloff(t: f64) -> f64 {
    if !t.is_finite() {
        return 0.0;
    }
    (t.clamp(0.0, 1.0) * FRAC_PI_2).cos()
}

/// Target scale for an item at `distance` from the pointer.
///
/// Returns 1.0 beyond the effect radius, `max_magnification` at distance
/// zero, and the cosine blend in between. A non-positive or non-finite
/// radius means magnification is disabled, never a division by zero.
#[must_use]
pub fn scale_at(distance: f64, effect_radius: f64, max_magnification: f64) -> f64 {
    if effect_radius <= 0.0
        || !effect_radius.is_finite()
        || !distance.is_finite()
        || !max_magnification.is_finite()
    {
        return 1.0;
    }
    if distance > effect_radius {
        return 1.0;
    }

    let t = distance / effect_radius;
    1.0 + falloff(t) * (max_magnification - 1.0).max(0.0)
}

/// Computes the target scale for every item center.
///
/// An absent pointer targets every item at rest (scale 1.0).
#[must_use]
pub fn target_scales(
    pointer: Option<Point>,
    centers: &[Point],
    effect_radius: f64,
    max_magnification: f64,
) -> Vec<f64> {
    match pointer {
        None => vec![1.0; centers.len()],
        Some(p) => centers
            .iter()
            .map(|center| scale_at(p.distance(*center), effect_radius, max_magnification))
            .collect(),
    }
}
