//! Exponential approach-to-target smoothing.
//!
//! The smoothing step covers a fixed fraction of the remaining distance to
//! the target every frame:
//!
//! ```text
//! next = current + (target - current) * factor
//! ```
//!
//! The remaining distance therefore shrinks by a constant ratio
//! `(1 - factor)` per frame. The approach is strictly monotone in distance
//! and can never overshoot, which makes it safe to run open-loop until an
//! epsilon convergence test says the value has settled.

use core::time::Duration;

use crate::vector::Point;

/// Default fraction of the remaining distance covered per frame.
const DEFAULT_FACTOR: f64 = 0.2;

/// Default convergence epsilon.
const DEFAULT_EPSILON: f64 = 0.001;

/// Returns the frame period for a given number of frames per second.
///
/// A rate of zero falls back to one frame per second.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use kinetic::fps;
///
/// assert_eq!(fps(60), Duration::from_secs_f64(1.0 / 60.0));
/// assert_eq!(fps(0), Duration::from_secs(1));
/// ```
#[inline]
pub fn fps(n: u32) -> Duration {
    if n == 0 {
        Duration::from_secs(1)
    } else {
        Duration::from_secs_f64(1.0 / f64::from(n))
    }
}

/// Plain linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Exponential smoothing parameters shared by a set of animated values.
///
/// A `Smoothing` holds the per-frame interpolation factor and the epsilon
/// below which a value counts as settled. One instance can step any number
/// of independent values each frame.
///
/// # Example
///
/// ```rust
/// use kinetic::Smoothing;
///
/// let smoothing = Smoothing::new(0.25, 0.001);
/// let mut scale = 1.0;
///
/// // Each frame covers a quarter of the remaining distance
/// scale = smoothing.step(scale, 1.6);
/// assert!((scale - 1.15).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    factor: f64,
    epsilon: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::new(DEFAULT_FACTOR, DEFAULT_EPSILON)
    }
}

impl Smoothing {
    /// Creates smoothing parameters, keeping both values in a legal range.
    ///
    /// The factor is clamped to `[0, 1]`; a non-finite factor falls back to
    /// the default. A non-finite or non-positive epsilon falls back to the
    /// default epsilon.
    pub fn new(factor: f64, epsilon: f64) -> Self {
        let factor = if factor.is_finite() {
            factor.clamp(0.0, 1.0)
        } else {
            DEFAULT_FACTOR
        };
        let epsilon = if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            DEFAULT_EPSILON
        };
        Self { factor, epsilon }
    }

    /// Returns the per-frame interpolation factor.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns the convergence epsilon.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Advances `current` one frame toward `target`.
    ///
    /// Non-finite inputs never propagate: if `target` is NaN or infinite
    /// the value holds still, and a non-finite `current` is replaced by the
    /// target (or zero when both are degenerate).
    #[inline]
    pub fn step(&self, current: f64, target: f64) -> f64 {
        match (current.is_finite(), target.is_finite()) {
            (true, true) => current + (target - current) * self.factor,
            (true, false) => current,
            (false, true) => target,
            (false, false) => 0.0,
        }
    }

    /// Advances a point one frame toward a target point, per axis.
    #[inline]
    pub fn step_point(&self, current: Point, target: Point) -> Point {
        Point::new(
            self.step(current.x, target.x),
            self.step(current.y, target.y),
        )
    }

    /// Returns whether `current` is within epsilon of `target`.
    ///
    /// A pair containing a non-finite value reports converged so that a
    /// degenerate target can never keep a loop alive forever.
    #[inline]
    pub fn converged(&self, current: f64, target: f64) -> bool {
        if !current.is_finite() || !target.is_finite() {
            return true;
        }
        (target - current).abs() < self.epsilon
    }

    /// Returns whether a point is within epsilon of a target on both axes.
    #[inline]
    pub fn converged_point(&self, current: Point, target: Point) -> bool {
        self.converged(current.x, target.x) && self.converged(current.y, target.y)
    }
}
