//! lumen-mqtt - MQTT link management for Lumen
//!
//! Owns the single broker connection for the program's lifetime:
//! configuration, the background client task (connect, subscribe, reconnect
//! with capped exponential backoff), inbound payload dispatch, and the
//! publish handle the application uses to send commands.

pub mod client;
pub mod config;
pub mod inbound;

pub use client::{BrokerLink, ConnectionState, LinkEvent, PublishHandle};
pub use config::{load_config, random_client_id, BrokerConfig};
pub use inbound::notice_for_message;
