//! Application state (the Model in the TEA loop)
//!
//! Everything the renderer needs lives here: the form itself, keyboard
//! focus, the mirrored link state, and the transient notice stack.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use lumen_core::prelude::*;
use lumen_core::{FormState, Notice};
use lumen_mqtt::ConnectionState;

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Maximum number of notices kept on screen at once; older ones are dropped
/// first.
const MAX_NOTICES: usize = 6;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The form field (or control) that currently has keyboard focus.
///
/// Which fields exist depends on the form state: the mode selector only
/// while power is on, the parameter sliders only for the selected mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Power,
    Mode,
    ColorR,
    ColorG,
    ColorB,
    ColorA,
    Pulse,
    Speed,
    Brightness,
    Password,
    Submit,
}

/// State of the open mode-selector menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMenuState {
    /// Index into [`lumen_core::Mode::ALL`].
    pub selected: usize,
}

/// A notice plus the instant it was raised, for expiry.
#[derive(Debug, Clone)]
pub struct PostedNotice {
    pub notice: Notice,
    pub posted: Instant,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The canonical controller form.
    pub form: FormState,

    /// Currently focused field.
    pub focus: Focus,

    /// Open mode-selector menu, if any.
    pub mode_menu: Option<ModeMenuState>,

    /// Last known broker link state, mirrored from link events for the
    /// status bar.
    pub link: ConnectionState,

    /// Active transient notices, oldest first.
    pub notices: VecDeque<PostedNotice>,

    /// Lifecycle phase.
    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            focus: Focus::Power,
            mode_menu: None,
            link: ConnectionState::Connecting,
            notices: VecDeque::new(),
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// The focusable fields for the current form state, in visual order.
    pub fn visible_fields(&self) -> Vec<Focus> {
        let mut fields = vec![Focus::Power];
        if self.form.power {
            fields.push(Focus::Mode);
        }
        if let Some(mode) = self.form.mode {
            if mode.uses_color() {
                fields.extend([
                    Focus::ColorR,
                    Focus::ColorG,
                    Focus::ColorB,
                    Focus::ColorA,
                    Focus::Pulse,
                ]);
            } else {
                if mode.uses_speed() {
                    fields.push(Focus::Speed);
                }
                fields.push(Focus::Brightness);
            }
        }
        fields.push(Focus::Password);
        fields.push(Focus::Submit);
        fields
    }

    /// Move focus to the next visible field (wrapping).
    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    /// Move focus to the previous visible field (wrapping).
    pub fn focus_prev(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }

    /// Snap focus back to a visible field after a transition hid the
    /// focused one (powering off while a slider was focused, for example).
    pub fn ensure_focus_visible(&mut self) {
        if !self.visible_fields().contains(&self.focus) {
            self.focus = Focus::Power;
        }
    }

    /// Raise a transient notice.
    pub fn push_notice(&mut self, notice: Notice) {
        if notice.is_error() {
            warn!("notice: {}", notice.text);
        } else {
            info!("notice: {}", notice.text);
        }
        self.notices.push_back(PostedNotice {
            notice,
            posted: Instant::now(),
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    /// Drop notices older than [`NOTICE_TTL`]. Called on every tick.
    pub fn expire_notices(&mut self) {
        let now = Instant::now();
        self.notices
            .retain(|posted| now.duration_since(posted.posted) < NOTICE_TTL);
    }
}
