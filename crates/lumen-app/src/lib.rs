//! lumen-app - Application state and orchestration for Lumen
//!
//! This crate implements the controller's state machine as a TEA (The Elm
//! Architecture) update loop: the canonical form state, the message types,
//! the update function, and the driver that dispatches publish actions onto
//! the broker link.

pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Focus, ModeMenuState, PostedNotice, NOTICE_TTL};

// Re-export link types for the TUI
pub use lumen_mqtt::{ConnectionState, LinkEvent};
