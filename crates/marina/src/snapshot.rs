//! Per-tick output state.
//!
//! A snapshot is the engine's entire contract with the renderer: plain,
//! serializable data describing what to paint right now. The engine makes
//! no assumption about how painting happens, and snapshots carry no
//! references back into engine state, so a renderer can hold one across a
//! frame boundary (or ship it over a wire) safely.

use serde::Serialize;

use crate::color::Rgb;

/// Render state for one dock item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRender {
    /// The tool's stable id.
    pub id: String,
    /// Theme color, passed through unmodified.
    pub color: Rgb,
    /// Current (animated) scale factor.
    pub scale: f64,
    /// Current (animated) top-left x.
    pub x: f64,
    /// Current (animated) top-left y.
    pub y: f64,
    /// Whether the item is under the pointer.
    pub hovered: bool,
    /// Whether the item is in its click flash.
    pub clicked: bool,
    /// Whether the item accepts interaction at all.
    pub enabled: bool,
}

/// Render state for one live particle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleRender {
    /// Current x position.
    pub x: f64,
    /// Current y position.
    pub y: f64,
    /// Spawn color.
    pub color: Rgb,
    /// Current size.
    pub size: f64,
    /// Remaining-life fade fraction in `[0, 1]`.
    pub opacity: f64,
}

/// One tick's complete output state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockSnapshot {
    /// Items in tool order.
    pub items: Vec<ItemRender>,
    /// Live particles, unordered.
    pub particles: Vec<ParticleRender>,
    /// Whether either engine loop still has a frame scheduled.
    pub animating: bool,
}
