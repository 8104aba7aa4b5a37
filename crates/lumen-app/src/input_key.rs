//! Terminal-independent keyboard input.
//!
//! The update loop consumes these instead of crossterm's key events, keeping
//! this crate free of terminal types. The TUI maps real key events into
//! `InputKey` at its boundary.

/// A single key press, already stripped down to what the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (goes to the password field when focused).
    Char(char),
    /// Character pressed together with Ctrl.
    CharCtrl(char),

    // Focus movement and slider adjustment
    Up,
    Down,
    Left,
    Right,

    // Slider jumps and coarse steps
    Home,
    End,
    PageUp,
    PageDown,

    // Form actions
    Enter,
    Esc,
    Tab,
    /// Shift+Tab.
    BackTab,
    Backspace,
    Delete,
}
