#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]

//! # Kinetic
//!
//! Frame-based motion primitives for 2D interactive surfaces.
//!
//! Kinetic provides:
//! - **Point / Vec2**: plain 2D coordinate and displacement types
//! - **Smoothing**: exponential approach-to-target interpolation with an
//!   epsilon convergence test
//!
//! ## Smoothing Example
//!
//! ```rust
//! use kinetic::Smoothing;
//!
//! // Cover 25% of the remaining distance each frame
//! let smoothing = Smoothing::new(0.25, 0.001);
//!
//! let mut value = 0.0;
//! let target = 100.0;
//!
//! // Run frames until the value settles
//! while !smoothing.converged(value, target) {
//!     value = smoothing.step(value, target);
//! }
//!
//! assert!((value - target).abs() < 0.001);
//! ```
//!
//! ## Vector Example
//!
//! ```rust
//! use kinetic::{Point, Vec2};
//!
//! let origin = Point::new(10.0, 20.0);
//! let offset = Vec2::new(3.0, 4.0);
//! let moved = origin + offset;
//!
//! assert_eq!(origin.distance(moved), 5.0);
//! ```
//!
//! Unlike a damped spring, the exponential step carries no velocity state
//! and can never overshoot its target: the distance to the target shrinks
//! by a constant ratio every frame.

mod smooth;
mod vector;

pub use smooth::{Smoothing, fps, lerp};
pub use vector::{Point, Vec2};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::smooth::{Smoothing, fps, lerp};
    pub use crate::vector::{Point, Vec2};
}
