//! Scenario tests for the update loop

use lumen_core::{Mode, Notice, NoticeLevel, Rgba};
use lumen_mqtt::{ConnectionState, LinkEvent};

use crate::handler::{update, UpdateAction};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};

fn key(state: &mut AppState, key: InputKey) {
    let mut msg = Some(Message::Key(key));
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn type_str(state: &mut AppState, text: &str) {
    for c in text.chars() {
        key(state, InputKey::Char(c));
    }
}

/// Drive the form to a fully valid, submittable state via transitions.
fn valid_color_form() -> AppState {
    let mut state = AppState::new();
    state.form.set_password("abcdef");
    state.form.set_power(true);
    state.form.select_mode(Mode::Color);
    state.form.set_color(Rgba::new(0, 255, 233, 1.0));
    state
}

// ─────────────────────────────────────────────────────────
// Submit guards
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_blocked_while_power_off() {
    let mut state = AppState::new();
    // valid, length-8 password; power stays off
    state.form.set_password("abcdefgh");
    assert!(state.form.form_valid);

    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_none(), "power off must block submission");
}

#[test]
fn test_submit_blocked_without_mode() {
    let mut state = AppState::new();
    state.form.set_password("abcdef");
    state.form.set_power(true);
    assert!(!state.form.form_valid, "mode is required while powered");

    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_none());
}

#[test]
fn test_submit_blocked_with_short_password() {
    let mut state = AppState::new();
    state.form.set_password("abc");
    state.form.set_power(true);
    state.form.select_mode(Mode::Color);

    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_none());
}

#[test]
fn test_submit_publishes_encoded_command() {
    let mut state = valid_color_form();
    assert!(state.form.form_valid);

    let result = update(&mut state, Message::Submit);
    let Some(UpdateAction::Publish { payload }) = result.action else {
        panic!("expected a publish action");
    };

    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value["o"], true);
    assert_eq!(value["m"], "c");
    assert_eq!(value["p"], "abcdef");
    // fully opaque UI alpha inverts to zero on the wire
    assert_eq!(value["c"]["a"], 0);
    assert_eq!(value["c"]["g"], 255);
}

#[test]
fn test_submit_leaves_form_populated() {
    let mut state = valid_color_form();
    let before = state.form.clone();

    let _ = update(&mut state, Message::Submit);
    assert_eq!(state.form, before, "submit must not transition the form");

    // and a second submit still works
    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_some());
}

// ─────────────────────────────────────────────────────────
// Keyboard-driven form flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_space_toggles_power() {
    let mut state = AppState::new();
    assert_eq!(state.focus, Focus::Power);

    key(&mut state, InputKey::Char(' '));
    assert!(state.form.power);

    key(&mut state, InputKey::Char(' '));
    assert!(!state.form.power);
}

#[test]
fn test_power_off_via_key_clears_mode() {
    let mut state = AppState::new();
    state.form.set_power(true);
    state.form.select_mode(Mode::Rainbow);

    state.focus = Focus::Power;
    key(&mut state, InputKey::Char(' '));
    assert!(!state.form.power);
    assert!(state.form.mode.is_none());
}

#[test]
fn test_reselecting_active_radio_keeps_mode() {
    let mut state = AppState::new();
    state.form.set_power(true);
    state.form.select_mode(Mode::Rainbow);
    state.focus = Focus::Power;

    key(&mut state, InputKey::Left);
    assert!(state.form.power);
    assert_eq!(state.form.mode, Some(Mode::Rainbow));

    key(&mut state, InputKey::Right);
    assert!(!state.form.power);
    assert!(state.form.mode.is_none());
}

#[test]
fn test_mode_menu_selection() {
    let mut state = AppState::new();
    state.form.set_power(true);
    state.focus = Focus::Mode;

    key(&mut state, InputKey::Enter);
    assert!(state.mode_menu.is_some());

    // move to the second entry (Periodic) and select it
    key(&mut state, InputKey::Down);
    key(&mut state, InputKey::Enter);
    assert!(state.mode_menu.is_none());
    assert_eq!(state.form.mode, Some(Mode::Periodic));
}

#[test]
fn test_mode_menu_esc_closes_without_selecting() {
    let mut state = AppState::new();
    state.form.set_power(true);
    state.focus = Focus::Mode;

    key(&mut state, InputKey::Enter);
    key(&mut state, InputKey::Esc);
    assert!(state.mode_menu.is_none());
    assert!(state.form.mode.is_none());
    assert_eq!(state.phase, AppPhase::Running);
}

#[test]
fn test_password_typing_validates_incrementally() {
    let mut state = AppState::new();
    state.focus = Focus::Password;

    type_str(&mut state, "abcde");
    assert!(!state.form.password_valid);

    type_str(&mut state, "f");
    assert!(state.form.password_valid);

    key(&mut state, InputKey::Backspace);
    assert!(!state.form.password_valid);
}

#[test]
fn test_enter_in_password_field_submits() {
    let mut state = valid_color_form();
    state.focus = Focus::Password;

    let result = update(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(result.message, Some(Message::Submit)));
}

#[test]
fn test_slider_adjustment_clamps() {
    let mut state = AppState::new();
    state.form.set_power(true);
    state.form.select_mode(Mode::Rainbow);

    state.focus = Focus::Speed;
    key(&mut state, InputKey::End);
    key(&mut state, InputKey::Right);
    assert_eq!(state.form.speed, 20.0);

    state.focus = Focus::Brightness;
    key(&mut state, InputKey::End);
    key(&mut state, InputKey::PageUp);
    assert_eq!(state.form.brightness, 255);
}

#[test]
fn test_ctrl_c_quits_from_any_focus() {
    let mut state = AppState::new();
    state.focus = Focus::Password;

    key(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Link events
// ─────────────────────────────────────────────────────────

#[test]
fn test_inbound_error_raises_exactly_one_notice() {
    let mut state = AppState::new();

    let notice = lumen_mqtt::notice_for_message("rgb/error", "rgb/error", br#"{"error":"overheat"}"#);
    let _ = update(
        &mut state,
        Message::Link(LinkEvent::Inbound {
            topic: "rgb/error".to_string(),
            notice,
        }),
    );

    assert_eq!(state.notices.len(), 1);
    let posted = &state.notices[0].notice;
    assert_eq!(posted.level, NoticeLevel::Error);
    assert!(posted.text.contains("overheat"));
}

#[test]
fn test_connected_updates_link_state() {
    let mut state = AppState::new();
    let _ = update(&mut state, Message::Link(LinkEvent::Connected));
    assert_eq!(state.link, ConnectionState::Connected);
    assert!(state.notices.is_empty());
}

#[test]
fn test_reconnecting_notifies_once() {
    let mut state = AppState::new();
    let _ = update(
        &mut state,
        Message::Link(LinkEvent::Reconnecting { attempt: 1 }),
    );
    assert_eq!(state.link, ConnectionState::Reconnecting { attempt: 1 });
    assert_eq!(state.notices.len(), 1);

    let _ = update(
        &mut state,
        Message::Link(LinkEvent::Reconnecting { attempt: 2 }),
    );
    assert_eq!(state.link, ConnectionState::Reconnecting { attempt: 2 });
    assert_eq!(state.notices.len(), 1, "later attempts stay off the stack");
}

#[test]
fn test_subscribe_failure_is_an_error_notice() {
    let mut state = AppState::new();
    let _ = update(
        &mut state,
        Message::Link(LinkEvent::SubscribeFailed {
            reason: "broker refused the subscription".to_string(),
        }),
    );
    assert_eq!(state.notices.len(), 1);
    assert!(state.notices[0].notice.is_error());
    assert!(state.notices[0].notice.text.contains("subscribe failed"));
}

#[test]
fn test_publish_failure_is_an_error_notice() {
    let mut state = AppState::new();
    let _ = update(
        &mut state,
        Message::Link(LinkEvent::PublishFailed {
            reason: "request channel closed".to_string(),
        }),
    );
    assert_eq!(state.notices.len(), 1);
    assert!(state.notices[0].notice.text.contains("got error submitting"));
    // the form is untouched and stays usable
    assert!(!state.should_quit());
}

#[test]
fn test_gave_up_marks_link_disconnected() {
    let mut state = AppState::new();
    let _ = update(&mut state, Message::Link(LinkEvent::GaveUp));
    assert_eq!(state.link, ConnectionState::Disconnected);
    assert!(state.notices[0].notice.is_error());
}

#[test]
fn test_quit_message_sets_phase() {
    let mut state = AppState::new();
    let _ = update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_info_notice_from_device() {
    let mut state = AppState::new();
    let _ = update(
        &mut state,
        Message::Link(LinkEvent::Inbound {
            topic: "rgb/error".to_string(),
            notice: Notice::info("mode applied"),
        }),
    );
    assert_eq!(state.notices.len(), 1);
    assert!(!state.notices[0].notice.is_error());
}
