//! Transient user notifications
//!
//! Short-lived messages raised by link events and inbound device messages,
//! stacked in a corner of the screen and expired after a few seconds.

use chrono::{DateTime, Local};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let info = Notice::info("subscribed");
        assert_eq!(info.level, NoticeLevel::Info);
        assert!(!info.is_error());

        let error = Notice::error("overheat");
        assert_eq!(error.level, NoticeLevel::Error);
        assert!(error.is_error());
        assert_eq!(error.text, "overheat");
    }
}
