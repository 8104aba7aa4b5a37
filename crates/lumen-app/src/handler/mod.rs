//! The update function and its event handlers
//!
//! Split by event source: `keys` for keyboard input routed by focus, `link`
//! for broker link events, and `update` for the dispatch and submit logic
//! tying them together.

pub(crate) mod keys;
pub(crate) mod link;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

pub use update::update;

/// Side effects the event loop performs after an update, outside the pure
/// state transition.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send an encoded command payload to the control topic.
    Publish { payload: String },
}

/// What an update produced: possibly a follow-up message to feed back
/// through the loop, possibly an action to perform.
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
