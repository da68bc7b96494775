#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Marina
//!
//! An interactive dock layout and particle-feedback engine.
//!
//! Marina renders nothing itself. It owns the simulation state of a dock —
//! a fixed-column grid of tools that magnify under the pointer, glide
//! toward their targets frame by frame, and burst into particles on
//! activation — and hands an immutable snapshot of that state to whatever
//! renderer embeds it.
//!
//! The engine is a synchronous state machine in the Elm style: input events
//! update input state, scheduled frame messages advance the simulation, and
//! every mutation returns an optional [`Cmd`] describing the next callback
//! the host should run. There is no internal thread and no hidden clock;
//! any scheduling primitive that can run a closure after a delay can drive
//! the engine.
//!
//! ## Example
//!
//! ```rust
//! use marina::{Dock, DockConfig, Rgb, ToolSpec};
//!
//! let tools = vec![
//!     ToolSpec::new("brush", Rgb::new(191, 77, 20)),
//!     ToolSpec::new("eraser", Rgb::new(32, 128, 96)),
//! ];
//! let mut dock = Dock::new(tools, DockConfig::default());
//!
//! // Pointer input only updates input state; frames do the animating.
//! let cmd = dock.on_pointer_move(24.0, 24.0);
//! assert!(cmd.is_some());
//!
//! // Drive one frame by hand (hosts usually execute the returned command).
//! dock.update(dock.frame_msg());
//!
//! let snapshot = dock.snapshot();
//! assert!(snapshot.items[0].scale > 1.0);
//! ```
//!
//! ## Components
//!
//! - **layout** - resting grid geometry and the scale-aware position resolver
//! - **magnify** - cosine-falloff magnification targeting
//! - **interaction** - per-item hover/click phases and the loading latch
//! - **particles** - burst spawning, integration, and retirement
//! - **dock** - the engine composite and its frame scheduler
//! - **driver** - a headless harness for tests and hosts without a frame clock

pub mod color;
pub mod command;
pub mod config;
pub mod dock;
pub mod driver;
pub mod interaction;
pub mod layout;
pub mod magnify;
pub mod message;
pub mod particles;
pub mod snapshot;

pub use color::{ParseColorError, Rgb};
pub use command::{Cmd, batch, tick};
pub use config::{DockConfig, ToolSpec};
pub use dock::{ClickExpiredMsg, Dock, FrameMsg};
pub use driver::DockDriver;
pub use interaction::{InteractionTracker, Phase};
pub use message::{BatchMsg, Message, ToolActivatedMsg};
pub use particles::{FieldTickMsg, Particle, ParticleField};
pub use snapshot::{DockSnapshot, ItemRender, ParticleRender};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::command::{Cmd, batch};
    pub use crate::config::{DockConfig, ToolSpec};
    pub use crate::dock::Dock;
    pub use crate::driver::DockDriver;
    pub use crate::message::{Message, ToolActivatedMsg};
    pub use crate::snapshot::{DockSnapshot, ItemRender, ParticleRender};
}
