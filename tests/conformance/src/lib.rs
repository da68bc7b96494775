#![forbid(unsafe_code)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! Conformance testing harness for the marina engine.
//!
//! The scenario tests in `tests/` drive a full engine end-to-end through
//! the headless driver and assert the engine's externally observable
//! guarantees: rest and convergence invariants, magnification numerics,
//! particle lifetimes, interaction eligibility, and loop scheduling
//! hygiene. This crate only hosts the shared fixtures.

use std::sync::Once;
use std::time::Duration;

use kinetic::Point;
use marina::{Dock, DockConfig, DockDriver, Rgb, ToolSpec};

static TRACING: Once = Once::new();

/// Installs a test subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The six tools used by the written-out numeric scenarios. Item 0 carries
/// the reference color `#bf4d14`.
#[must_use]
pub fn standard_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("brush", Rgb::new(191, 77, 20)),
        ToolSpec::new("eraser", Rgb::new(32, 128, 96)),
        ToolSpec::new("fill", Rgb::new(80, 80, 200)),
        ToolSpec::new("pick", Rgb::new(200, 180, 40)),
        ToolSpec::new("zoom", Rgb::new(120, 40, 160)),
        ToolSpec::new("pan", Rgb::new(40, 160, 160)),
    ]
}

/// The reference tuning: 3 columns, 48px items, 8px spacing, 200px effect
/// radius, 1.6x magnification. Timing knobs are shrunk so scheduled
/// commands (click flash, frame sleeps) resolve quickly under test.
#[must_use]
pub fn standard_config() -> DockConfig {
    DockConfig {
        columns: 3,
        item_size: 48.0,
        spacing: 8.0,
        effect_radius: 200.0,
        max_magnification: 1.6,
        pointer_throttle: Duration::ZERO,
        click_flash: Duration::from_millis(1),
        ..DockConfig::default()
    }
}

/// A seeded engine over the standard scenario.
#[must_use]
pub fn standard_dock() -> Dock {
    init_tracing();
    Dock::with_seed(standard_tools(), standard_config(), 7)
}

/// A driver around [`standard_dock`].
#[must_use]
pub fn standard_driver() -> DockDriver {
    DockDriver::new(standard_dock())
}

/// Center of item `index` in the standard 3-column layout.
#[must_use]
pub fn item_center(index: usize) -> Point {
    let pitch = 48.0 + 8.0;
    let col = (index % 3) as f64;
    let row = (index / 3) as f64;
    Point::new(col * pitch + 24.0, row * pitch + 24.0)
}
