//! Terminal event polling
//!
//! Polls crossterm with a short timeout so the event loop keeps ticking even
//! when the keyboard is idle; the tick drives notice expiry.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use lumen_app::message::Message;
use lumen_app::InputKey;
use lumen_core::prelude::*;

/// Poll interval. Anything under ~100ms keeps slider adjustments feeling
/// immediate.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Translate a crossterm key event into the form's input alphabet.
///
/// Keys the form has no use for map to `None` and are dropped at the
/// boundary.
pub fn translate_key(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Tab if shift => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        _ => return None,
    };
    Some(input)
}

/// Wait up to [`POLL_TIMEOUT`] for a terminal event.
///
/// Returns a key message for presses the form understands, `Message::Tick`
/// when the timeout elapses, and `None` for everything else (releases,
/// resizes, unmapped keys).
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(translate_key(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}
