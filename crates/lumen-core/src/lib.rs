//! # lumen-core
//!
//! Foundation crate for Lumen: the controller form model, the validation
//! engine, the wire-command encoder, the error taxonomy, and logging setup.
//! Depends only on external crates -- every other Lumen crate sits on top of
//! this one.
//!
//! The pieces, bottom up:
//!
//! - [`types`] -- [`FormState`] and its transitions, the [`Mode`] set, and
//!   [`Rgba`] with the UI alpha convention
//! - [`validate`] -- [`check_password()`] and [`form_valid()`], the pure
//!   validity functions the form recomputes on every edit
//! - [`command`] -- [`encode()`], turning a validated form into the compact
//!   JSON payload the device parses
//! - [`notice`] -- [`Notice`], the transient user-facing notifications
//! - [`error`] -- [`Error`] with its recoverable/fatal split, plus
//!   [`ResultExt`] for contextual logging
//! - [`logging`] -- file-based tracing init
//!
//! Grab the common imports with:
//! ```rust
//! use lumen_core::prelude::*;
//! ```

pub mod command;
pub mod error;
pub mod logging;
pub mod notice;
pub mod types;
pub mod validate;

/// Common imports shared by all Lumen crates.
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use command::encode;
pub use error::{Error, Result, ResultExt};
pub use notice::{Notice, NoticeLevel};
pub use types::{
    FormState, Mode, Rgba, BRIGHTNESS_DEFAULT, PULSE_DEFAULT, PULSE_MAX, PULSE_STEP, SPEED_DEFAULT,
    SPEED_MAX,
};
pub use validate::{check_password, form_valid, PasswordCheck, MIN_PASSWORD_LEN};
