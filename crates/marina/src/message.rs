//! Message types for the engine's update loop.
//!
//! All input the engine reacts to — scheduled frame callbacks, click-flash
//! expiries, activation notifications — arrives as a [`Message`]. Hosts feed
//! messages into [`Dock::update`](crate::Dock::update) and execute whatever
//! command comes back.

use std::any::Any;
use std::fmt;

use crate::command::Cmd;

/// A type-erased message container.
///
/// Messages can be any type that is `Send + 'static`. Use [`Message::new`]
/// to create a message and [`Message::downcast`] to retrieve the original
/// type.
///
/// # Example
///
/// ```rust
/// use marina::Message;
///
/// struct MyMsg(i32);
///
/// let msg = Message::new(MyMsg(42));
/// if let Some(my_msg) = msg.downcast::<MyMsg>() {
///     assert_eq!(my_msg.0, 42);
/// }
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to downcast to a specific message type.
    ///
    /// Returns `Some(T)` if the message is of type `T`, otherwise `None`.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to get a reference to the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check if the message is of a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

// Built-in message types

/// A set of commands to run concurrently, produced by [`batch`](crate::batch).
///
/// Hosts that receive a `BatchMsg` execute each contained command and feed
/// every resulting message back into the engine; ordering between the
/// commands is not guaranteed.
pub struct BatchMsg(pub Vec<Cmd>);

impl fmt::Debug for BatchMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BatchMsg").field(&self.0.len()).finish()
    }
}

/// Notification that a tool's click completed, fired once per activation.
///
/// The engine never consumes this message itself; it exists for the host's
/// business-logic layer, which performs the tool's actual effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolActivatedMsg {
    /// The activated tool's id.
    pub id: String,
}
