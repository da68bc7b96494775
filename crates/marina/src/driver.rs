//! Headless engine driver.
//!
//! `DockDriver` stands in for a host that has a frame callback mechanism
//! of its own: it executes the commands the engine returns, feeds the
//! produced messages back in, and records activation notifications. Frame
//! loops are replayed synchronously through the engine's current-tag
//! message constructors instead of sleeping through scheduled commands, so
//! a thousand simulated frames cost a thousand updates, not sixteen
//! seconds.
//!
//! The conformance harness drives every end-to-end scenario through this
//! type; embedders without a real scheduler can use it directly.

use std::collections::VecDeque;

use crate::command::Cmd;
use crate::dock::Dock;
use crate::message::{BatchMsg, Message, ToolActivatedMsg};

/// A synchronous harness around a [`Dock`].
pub struct DockDriver {
    dock: Dock,
    queue: VecDeque<Message>,
    activations: Vec<String>,
}

impl DockDriver {
    /// Wraps a dock.
    #[must_use]
    pub fn new(dock: Dock) -> Self {
        Self {
            dock,
            queue: VecDeque::new(),
            activations: Vec::new(),
        }
    }

    /// The wrapped dock.
    #[must_use]
    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    /// Mutable access to the wrapped dock.
    pub fn dock_mut(&mut self) -> &mut Dock {
        &mut self.dock
    }

    /// Consumes the driver and returns the dock.
    #[must_use]
    pub fn into_dock(self) -> Dock {
        self.dock
    }

    /// Tool ids activated so far, in delivery order.
    #[must_use]
    pub fn activations(&self) -> &[String] {
        &self.activations
    }

    /// Drains and returns the recorded activations.
    pub fn take_activations(&mut self) -> Vec<String> {
        std::mem::take(&mut self.activations)
    }

    /// Forwards a pointer-move event.
    ///
    /// The returned frame command is discarded — the driver replays frames
    /// itself via [`step_frame`](Self::step_frame).
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let _ = self.dock.on_pointer_move(x, y);
    }

    /// Forwards a pointer-leave event.
    pub fn pointer_leave(&mut self) {
        let _ = self.dock.on_pointer_leave();
    }

    /// Forwards an activation and settles its immediate consequences.
    ///
    /// The activation batch (notification, click-flash expiry, loop kicks)
    /// executes synchronously, so this call blocks for the configured
    /// `click_flash` plus one frame period. Returns whether the activation
    /// was eligible.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.dock.on_activate(id) {
            Some(cmd) => {
                self.dispatch(cmd);
                self.pump(64);
                true
            }
            None => false,
        }
    }

    /// Queues a message for [`pump`](Self::pump).
    pub fn send(&mut self, msg: Message) {
        self.queue.push_back(msg);
    }

    /// Processes up to `max_steps` queued messages.
    ///
    /// Batches fan out (their sub-commands execute immediately),
    /// [`ToolActivatedMsg`] is recorded, and everything else goes through
    /// [`Dock::update`]. Commands returned by `update` are scheduling
    /// commands for the engine's own loops and are discarded; use
    /// [`step_frame`](Self::step_frame) to advance those deterministically.
    ///
    /// Returns the number of messages processed.
    pub fn pump(&mut self, max_steps: usize) -> usize {
        let mut processed = 0;

        while processed < max_steps {
            let Some(msg) = self.queue.pop_front() else {
                break;
            };
            processed += 1;

            if msg.is::<BatchMsg>() {
                let cmds = msg.downcast::<BatchMsg>().map(|b| b.0).unwrap_or_default();
                for cmd in cmds {
                    if let Some(produced) = cmd.execute() {
                        self.queue.push_back(produced);
                    }
                }
                continue;
            }

            if let Some(activated) = msg.downcast_ref::<ToolActivatedMsg>() {
                self.activations.push(activated.id.clone());
                continue;
            }

            let _ = self.dock.update(msg);
        }

        processed
    }

    /// Advances both engine loops one frame, without sleeping.
    pub fn step_frame(&mut self) {
        let frame = self.dock.frame_msg();
        let _ = self.dock.update(frame);
        let tick = self.dock.particle_msg();
        let _ = self.dock.update(tick);
    }

    /// Steps frames until the engine is fully settled (items at rest,
    /// pointer absent, no particles) or `max_frames` is reached.
    ///
    /// Returns the number of frames stepped. A dock whose pointer is still
    /// present never settles; callers wanting that scenario should bound
    /// with `max_frames` and assert on the snapshot instead.
    pub fn run_until_settled(&mut self, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if self.dock.is_settled() {
                return frame;
            }
            self.step_frame();
        }
        max_frames
    }

    /// Executes a command and queues whatever message it produces.
    fn dispatch(&mut self, cmd: Cmd) {
        if let Some(msg) = cmd.execute() {
            self.queue.push_back(msg);
        }
    }
}
