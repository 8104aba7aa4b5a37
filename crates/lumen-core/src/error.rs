//! Error taxonomy
//!
//! Link-layer failures (broker, subscribe, publish, inbound protocol) are
//! recoverable and surface as transient notices; terminal and configuration
//! failures abort startup.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Infrastructure
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Broker link
    // ─────────────────────────────────────────────────────────────
    #[error("Broker connection error: {message}")]
    Broker { message: String },

    #[error("Failed to subscribe to '{topic}': {reason}")]
    Subscribe { topic: String, reason: String },

    #[error("Publish failed: {reason}")]
    Publish { reason: String },

    /// Inbound payloads that don't follow the device's message format.
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration file {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Channels
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn broker(message: impl Into<String>) -> Self {
        Self::Broker {
            message: message.into(),
        }
    }

    pub fn subscribe(topic: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Subscribe {
            topic: topic.into(),
            reason: reason.into(),
        }
    }

    pub fn publish(reason: impl Into<String>) -> Self {
        Self::Publish {
            reason: reason.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Errors the form shrugs off: shown as a notice, then life goes on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Broker { .. }
                | Error::Subscribe { .. }
                | Error::Publish { .. }
                | Error::Protocol { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Errors that end the program: no terminal or no usable configuration.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ConfigInvalid { .. })
    }
}

/// Attach a human-readable context string to an error as it crosses a
/// boundary; the context is logged, the error passes through unchanged.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`context`](Self::context) with the string built lazily.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::broker("connection refused");
        assert_eq!(
            err.to_string(),
            "Broker connection error: connection refused"
        );

        let err = Error::subscribe("rgb/error", "timed out");
        assert!(err.to_string().contains("rgb/error"));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(Error::config_invalid("/tmp/config.toml", "bad port").is_fatal());
        assert!(!Error::broker("test").is_fatal());
        assert!(!Error::publish("test").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::broker("test").is_recoverable());
        assert!(Error::subscribe("rgb/error", "denied").is_recoverable());
        assert!(Error::publish("disconnected").is_recoverable());
        assert!(Error::protocol("no message key found").is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }

    #[test]
    fn test_fatal_and_recoverable_are_disjoint() {
        let samples = [
            Error::broker("x"),
            Error::publish("x"),
            Error::protocol("x"),
            Error::TerminalInit("x".to_string()),
            Error::config_invalid("/tmp/c.toml", "x"),
            Error::ChannelClosed,
        ];
        for err in samples {
            assert!(
                !(err.is_fatal() && err.is_recoverable()),
                "{err} classified both ways"
            );
        }
    }
}
