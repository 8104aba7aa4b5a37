//! End-to-end form flow: keyboard input through the update loop down to the
//! encoded control payload.

use lumen_app::handler::{update, UpdateAction};
use lumen_app::message::Message;
use lumen_app::state::{AppState, Focus};
use lumen_app::InputKey;
use lumen_core::Mode;

/// Feed a message through the update loop, following up messages, and
/// collect any actions produced along the way.
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    drive(state, Message::Key(key))
}

#[test]
fn keyboard_flow_produces_encoded_command() {
    let mut state = AppState::new();

    // Power on
    assert_eq!(state.focus, Focus::Power);
    press(&mut state, InputKey::Char(' '));
    assert!(state.form.power);

    // Open the mode menu and pick the first entry (Color)
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Mode);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.form.mode, Some(Mode::Color));

    // Walk past the color and pulse sliders to the password field
    for _ in 0..6 {
        press(&mut state, InputKey::Tab);
    }
    assert_eq!(state.focus, Focus::Password);

    for c in "abcdef".chars() {
        press(&mut state, InputKey::Char(c));
    }
    assert!(state.form.form_valid);

    // Enter in the password field submits
    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(actions.len(), 1);
    let UpdateAction::Publish { payload } = &actions[0];

    let value: serde_json::Value = serde_json::from_str(payload).unwrap();
    assert_eq!(value["o"], true);
    assert_eq!(value["m"], "c");
    assert_eq!(value["p"], "abcdef");
    assert_eq!(value["s"], 1.0);
    assert_eq!(value["f"], 0.0);
    assert_eq!(value["b"], 255);
    // default color is opaque white; alpha inverts to 0 on the wire
    assert_eq!(value["c"]["r"], 255);
    assert_eq!(value["c"]["a"], 0);

    // Submit does not consume the form; a second submit works
    let again = press(&mut state, InputKey::Enter);
    assert_eq!(again.len(), 1);
}

#[test]
fn powering_off_blocks_resubmission() {
    let mut state = AppState::new();
    state.form.set_password("abcdef");
    state.form.set_power(true);
    state.form.select_mode(Mode::Rainbow);
    assert!(state.form.can_submit());

    // Power off from the keyboard
    state.focus = Focus::Power;
    press(&mut state, InputKey::Char(' '));
    assert!(!state.form.power);
    assert!(state.form.mode.is_none());

    // Valid password alone is not enough to submit
    let actions = drive(&mut state, Message::Submit);
    assert!(actions.is_empty());
}
