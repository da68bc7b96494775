//! Engine configuration.
//!
//! Configuration is plain data owned by an external settings store; the
//! engine receives it at construction (or through
//! [`Dock::set_config`](crate::Dock::set_config)) and never mutates it.
//! Malformed values are not errors: [`DockConfig::normalized`] clamps them
//! to safe equivalents so a broken theme can never take the interactive
//! surface down.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Rgb;

/// Default number of grid columns.
const DEFAULT_COLUMNS: usize = 8;
/// Default item edge length in dock units.
const DEFAULT_ITEM_SIZE: f64 = 48.0;
/// Default gap between items.
const DEFAULT_SPACING: f64 = 8.0;
/// Default magnification effect radius.
const DEFAULT_EFFECT_RADIUS: f64 = 200.0;
/// Default scale at zero pointer distance.
const DEFAULT_MAX_MAGNIFICATION: f64 = 1.6;
/// Default position-resolver spread constant.
const DEFAULT_SHIFT_FACTOR: f64 = 0.1;
/// Default lerp factor while the pointer is active.
const DEFAULT_ACTIVE_LERP: f64 = 0.25;
/// Default lerp factor while settling back to rest.
const DEFAULT_SETTLE_LERP: f64 = 0.15;
/// Default convergence epsilon.
const DEFAULT_EPSILON: f64 = 0.001;
/// Default frame rate for scheduled ticks.
const DEFAULT_FRAME_RATE: u32 = 60;
/// Default particles per burst.
const DEFAULT_PARTICLE_COUNT: usize = 12;
/// Default particle lifetime in ticks.
const DEFAULT_PARTICLE_LIFE: u32 = 80;
/// Default downward velocity bias per tick.
const DEFAULT_GRAVITY: f64 = 0.15;
/// Default per-tick velocity retention.
const DEFAULT_FRICTION: f64 = 0.97;
/// Default click-flash duration.
const DEFAULT_CLICK_FLASH: Duration = Duration::from_millis(700);
/// Default minimum interval between accepted pointer-move events.
const DEFAULT_POINTER_THROTTLE: Duration = Duration::from_millis(10);

/// Descriptor for one tool in the dock.
///
/// Tool descriptors are fixed-shape data validated once at construction;
/// the engine never reaches into a theme object by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Stable identifier, unique within the dock.
    pub id: String,
    /// Theme color, passed through to snapshots unmodified.
    pub color: Rgb,
    /// Disabled tools never magnify and never activate.
    pub enabled: bool,
}

impl ToolSpec {
    /// Creates an enabled tool descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>, color: Rgb) -> Self {
        Self {
            id: id.into(),
            color,
            enabled: true,
        }
    }

    /// Marks the tool as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Tuning for the dock's layout, magnification, animation, particles, and
/// interaction timing.
///
/// All fields are public plain data so a settings store can construct and
/// serialize the struct directly. Pass it through [`normalized`] (the
/// engine does this on receipt) before using the values.
///
/// [`normalized`]: DockConfig::normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Number of grid columns (row-major layout).
    pub columns: usize,
    /// Item edge length.
    pub item_size: f64,
    /// Gap between adjacent items.
    pub spacing: f64,

    /// Pointer distance beyond which magnification is zero. A value of
    /// zero (or less) disables magnification entirely.
    pub effect_radius: f64,
    /// Target scale for an item directly under the pointer.
    pub max_magnification: f64,
    /// Proportionality constant for the scale-dependent position spread.
    pub shift_factor: f64,

    /// Whether per-frame interpolation runs at all. When false, values
    /// snap straight to their targets.
    pub animations_enabled: bool,
    /// Fraction of remaining distance covered per frame while the pointer
    /// is present.
    pub active_lerp: f64,
    /// Fraction of remaining distance covered per frame while settling.
    pub settle_lerp: f64,
    /// Convergence epsilon for scale and position.
    pub epsilon: f64,
    /// Scheduled tick rate in frames per second.
    pub frame_rate: u32,

    /// Whether activations spawn particle bursts.
    pub particles_enabled: bool,
    /// Particles per burst.
    pub particle_count: usize,
    /// Particle lifetime in ticks.
    pub particle_life: u32,
    /// Downward velocity bias added each tick.
    pub gravity: f64,
    /// Velocity retention factor applied each tick.
    pub friction: f64,

    /// How long an item stays in the clicked phase before reverting.
    pub click_flash: Duration,
    /// Minimum interval between accepted pointer-move events.
    pub pointer_throttle: Duration,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            item_size: DEFAULT_ITEM_SIZE,
            spacing: DEFAULT_SPACING,
            effect_radius: DEFAULT_EFFECT_RADIUS,
            max_magnification: DEFAULT_MAX_MAGNIFICATION,
            shift_factor: DEFAULT_SHIFT_FACTOR,
            animations_enabled: true,
            active_lerp: DEFAULT_ACTIVE_LERP,
            settle_lerp: DEFAULT_SETTLE_LERP,
            epsilon: DEFAULT_EPSILON,
            frame_rate: DEFAULT_FRAME_RATE,
            particles_enabled: true,
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_life: DEFAULT_PARTICLE_LIFE,
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            click_flash: DEFAULT_CLICK_FLASH,
            pointer_throttle: DEFAULT_POINTER_THROTTLE,
        }
    }
}

impl DockConfig {
    /// Returns a copy with every field clamped to a legal value.
    ///
    /// Degradation is graceful by design: a zero-column grid becomes one
    /// column, a non-positive effect radius disables magnification, and
    /// non-finite tuning falls back to defaults. Each adjustment is logged
    /// at `warn` level.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.columns == 0 {
            warn!("dock config: columns == 0, using 1");
            self.columns = 1;
        }
        if !self.item_size.is_finite() || self.item_size < 0.0 {
            warn!(item_size = self.item_size, "dock config: bad item size");
            self.item_size = DEFAULT_ITEM_SIZE;
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            warn!(spacing = self.spacing, "dock config: bad spacing");
            self.spacing = 0.0;
        }
        if !self.effect_radius.is_finite() || self.effect_radius < 0.0 {
            warn!(
                effect_radius = self.effect_radius,
                "dock config: bad effect radius, magnification disabled"
            );
            self.effect_radius = 0.0;
        }
        if !self.max_magnification.is_finite() || self.max_magnification < 1.0 {
            warn!(
                max_magnification = self.max_magnification,
                "dock config: bad max magnification"
            );
            self.max_magnification = 1.0;
        }
        if !self.shift_factor.is_finite() {
            warn!("dock config: non-finite shift factor");
            self.shift_factor = 0.0;
        }
        if !self.active_lerp.is_finite() {
            warn!("dock config: non-finite active lerp");
            self.active_lerp = DEFAULT_ACTIVE_LERP;
        } else {
            self.active_lerp = self.active_lerp.clamp(0.0, 1.0);
        }
        if !self.settle_lerp.is_finite() {
            warn!("dock config: non-finite settle lerp");
            self.settle_lerp = DEFAULT_SETTLE_LERP;
        } else {
            self.settle_lerp = self.settle_lerp.clamp(0.0, 1.0);
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            warn!(epsilon = self.epsilon, "dock config: bad epsilon");
            self.epsilon = DEFAULT_EPSILON;
        }
        if self.frame_rate == 0 {
            warn!("dock config: frame rate == 0, using 1");
            self.frame_rate = 1;
        }
        if self.particle_life == 0 {
            warn!("dock config: particle life == 0");
            self.particle_life = DEFAULT_PARTICLE_LIFE;
        }
        if !self.gravity.is_finite() {
            warn!("dock config: non-finite gravity");
            self.gravity = 0.0;
        }
        if !self.friction.is_finite() {
            warn!("dock config: non-finite friction");
            self.friction = DEFAULT_FRICTION;
        } else {
            self.friction = self.friction.clamp(0.0, 1.0);
        }
        self
    }
}
