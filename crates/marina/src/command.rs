//! Commands for scheduled side effects.
//!
//! A command is a lazy closure that produces a message, usually after a
//! delay. Commands are the engine's only scheduling primitive: the frame
//! loop asks the host to "run this after one frame period", the click flash
//! asks for "run this after the flash duration", and the host feeds the
//! produced message back into the engine. Nothing executes until the host
//! runs the command, which keeps the update function pure.

use std::time::{Duration, Instant};

use crate::message::{BatchMsg, Message};

/// A command that produces a message when executed.
///
/// # Example
///
/// ```rust
/// use marina::{Cmd, Message};
/// use std::time::Duration;
///
/// // A command that produces a message after a delay
/// fn delayed_message() -> Cmd {
///     Cmd::new(|| {
///         std::thread::sleep(Duration::from_millis(10));
///         Message::new("done")
///     })
/// }
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Batch multiple commands to run concurrently.
///
/// Commands in a batch run with no ordering guarantees. `None` entries are
/// dropped, a single surviving command passes through unchanged, and
/// several are wrapped in a [`BatchMsg`] for the host to fan out.
///
/// # Example
///
/// ```rust
/// use marina::{Cmd, Message, batch};
///
/// let cmd = batch(vec![
///     Some(Cmd::new(|| Message::new("first"))),
///     None,
///     Some(Cmd::new(|| Message::new("second"))),
/// ]);
/// assert!(cmd.is_some());
/// ```
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid_cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid_cmds.len() {
        0 => None,
        1 => valid_cmds.into_iter().next(),
        _ => Some(Cmd::new_optional(move || {
            Some(Message::new(BatchMsg(valid_cmds)))
        })),
    }
}

/// Command that ticks after a duration.
///
/// The tick runs for the full duration from when it's invoked. To create a
/// periodic loop, return another tick command from your update function
/// when handling the tick message.
///
/// # Example
///
/// ```rust,ignore
/// use marina::{Cmd, Message, tick};
/// use std::time::{Duration, Instant};
///
/// struct TickMsg(Instant);
///
/// fn do_tick() -> Cmd {
///     tick(Duration::from_millis(16), |t| Message::new(TickMsg(t)))
/// }
/// ```
pub fn tick<F>(duration: Duration, f: F) -> Cmd
where
    F: FnOnce(Instant) -> Message + Send + 'static,
{
    Cmd::new(move || {
        std::thread::sleep(duration);
        f(Instant::now())
    })
}
