//! Key event handlers for the form
//!
//! Keyboard model: Tab/Shift-Tab and Up/Down move between fields, Left/Right
//! (and PageUp/PageDown for coarse steps) adjust the focused slider, Space or
//! Enter activates the focused control, and typing goes to the password
//! field. Esc quits, or closes the mode menu when it is open.

use lumen_core::types::{PULSE_STEP, SPEED_MAX};
use lumen_core::{Mode, Rgba};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, ModeMenuState};

/// Coarse step for 0-255 sliders via PageUp/PageDown.
const COLOR_PAGE_STEP: i16 = 16;

/// Fine and coarse steps for the alpha channel.
const ALPHA_STEP: f32 = 0.05;
const ALPHA_PAGE_STEP: f32 = 0.25;

/// Handle a key event, possibly producing a follow-up message.
pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits, regardless of focus.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.mode_menu.is_some() {
        return handle_menu_key(state, key);
    }

    match key {
        InputKey::Tab | InputKey::Down => {
            state.focus_next();
            None
        }
        InputKey::BackTab | InputKey::Up => {
            state.focus_prev();
            None
        }
        InputKey::Esc => Some(Message::Quit),
        _ => handle_field_key(state, key),
    }
}

/// Keys while the mode-selector menu is open.
fn handle_menu_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let menu = state.mode_menu.as_mut()?;
    match key {
        InputKey::Up => {
            menu.selected = menu.selected.checked_sub(1).unwrap_or(Mode::ALL.len() - 1);
        }
        InputKey::Down => {
            menu.selected = (menu.selected + 1) % Mode::ALL.len();
        }
        InputKey::Enter => {
            let mode = Mode::ALL[menu.selected];
            state.mode_menu = None;
            state.form.select_mode(mode);
        }
        InputKey::Esc => {
            state.mode_menu = None;
        }
        _ => {}
    }
    None
}

/// Keys routed to the focused field.
fn handle_field_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match state.focus {
        Focus::Power => handle_power_key(state, key),
        Focus::Mode => handle_mode_key(state, key),
        Focus::ColorR | Focus::ColorG | Focus::ColorB => handle_color_key(state, key),
        Focus::ColorA => handle_alpha_key(state, key),
        Focus::Pulse => handle_pulse_key(state, key),
        Focus::Speed => handle_speed_key(state, key),
        Focus::Brightness => handle_brightness_key(state, key),
        Focus::Password => handle_password_key(state, key),
        Focus::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::Submit),
            _ => None,
        },
    }
}

fn handle_power_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => {
            let on = !state.form.power;
            state.form.set_power(on);
            state.ensure_focus_visible();
        }
        // Radio semantics: left selects On, right selects Off. Re-selecting
        // the active side is a no-op so it cannot clear the mode.
        InputKey::Left => {
            if !state.form.power {
                state.form.set_power(true);
            }
        }
        InputKey::Right => {
            if state.form.power {
                state.form.set_power(false);
                state.ensure_focus_visible();
            }
        }
        _ => {}
    }
    None
}

fn handle_mode_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if matches!(key, InputKey::Enter | InputKey::Char(' ')) {
        let selected = state
            .form
            .mode
            .and_then(|mode| Mode::ALL.iter().position(|m| *m == mode))
            .unwrap_or(0);
        state.mode_menu = Some(ModeMenuState { selected });
    }
    None
}

/// Apply a signed step to a byte channel, saturating at the bounds.
fn step_byte(value: u8, delta: i16) -> u8 {
    (i16::from(value) + delta).clamp(0, 255) as u8
}

fn byte_delta(key: &InputKey) -> Option<i16> {
    match key {
        InputKey::Left => Some(-1),
        InputKey::Right => Some(1),
        InputKey::PageDown => Some(-COLOR_PAGE_STEP),
        InputKey::PageUp => Some(COLOR_PAGE_STEP),
        _ => None,
    }
}

fn handle_color_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let color = state.form.color;
    match key {
        InputKey::Home => {
            apply_channel(state, 0);
            return None;
        }
        InputKey::End => {
            apply_channel(state, 255);
            return None;
        }
        _ => {}
    }
    let delta = byte_delta(&key)?;
    let next = match state.focus {
        Focus::ColorR => step_byte(color.r, delta),
        Focus::ColorG => step_byte(color.g, delta),
        Focus::ColorB => step_byte(color.b, delta),
        _ => return None,
    };
    apply_channel(state, next);
    None
}

fn apply_channel(state: &mut AppState, value: u8) {
    let mut color = state.form.color;
    match state.focus {
        Focus::ColorR => color.r = value,
        Focus::ColorG => color.g = value,
        Focus::ColorB => color.b = value,
        _ => return,
    }
    state.form.set_color(color);
}

fn handle_alpha_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let color = state.form.color;
    let a = match key {
        InputKey::Left => color.a - ALPHA_STEP,
        InputKey::Right => color.a + ALPHA_STEP,
        InputKey::PageDown => color.a - ALPHA_PAGE_STEP,
        InputKey::PageUp => color.a + ALPHA_PAGE_STEP,
        InputKey::Home => 0.0,
        InputKey::End => 1.0,
        _ => return None,
    };
    state
        .form
        .set_color(Rgba::new(color.r, color.g, color.b, a));
    None
}

fn handle_pulse_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let pulse = state.form.pulse;
    let next = match key {
        InputKey::Left => pulse - PULSE_STEP,
        InputKey::Right => pulse + PULSE_STEP,
        InputKey::PageDown => pulse - 1.0,
        InputKey::PageUp => pulse + 1.0,
        InputKey::Home => 0.0,
        _ => return None,
    };
    state.form.set_pulse(next);
    None
}

fn handle_speed_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let speed = state.form.speed;
    let next = match key {
        InputKey::Left => speed - 1.0,
        InputKey::Right => speed + 1.0,
        InputKey::Home => 0.0,
        InputKey::End => SPEED_MAX,
        _ => return None,
    };
    state.form.set_speed(next);
    None
}

fn handle_brightness_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let brightness = state.form.brightness;
    match key {
        InputKey::Home => state.form.set_brightness(0),
        InputKey::End => state.form.set_brightness(255),
        _ => {
            let delta = byte_delta(&key)?;
            state.form.set_brightness(step_byte(brightness, delta));
        }
    }
    None
}

fn handle_password_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut password = state.form.password.clone();
            password.push(c);
            state.form.set_password(password);
        }
        InputKey::Backspace => {
            let mut password = state.form.password.clone();
            password.pop();
            state.form.set_password(password);
        }
        InputKey::Delete => {
            state.form.set_password(String::new());
        }
        InputKey::Enter => {
            // Enter in the password field submits, mirroring plain form
            // behavior.
            return Some(Message::Submit);
        }
        _ => {}
    }
    None
}
