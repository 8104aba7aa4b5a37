//! Message dispatch and the submit path

use lumen_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys, link, UpdateAction, UpdateResult};

/// Apply one message to the state.
///
/// The only pure-state mutation entry point; side effects leave as an
/// [`UpdateAction`] for the event loop to carry out.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Link(event) => link::handle_link_event(state, event),

        Message::Tick => {
            state.expire_notices();
            UpdateResult::none()
        }

        Message::Submit => submit(state),
    }
}

/// Encode and publish the current form.
///
/// Guarded on `can_submit()`: the form must be valid and a mode selected,
/// otherwise there is nothing meaningful to encode. No state transition
/// happens on submit -- the form stays populated for resubmission.
fn submit(state: &mut AppState) -> UpdateResult {
    if !state.form.can_submit() {
        debug!("submit ignored: form not submittable");
        return UpdateResult::none();
    }

    match lumen_core::encode(&state.form) {
        Ok(payload) => {
            // The payload carries the device password, so only the mode is
            // logged.
            info!(
                "publishing command (power={}, mode={:?})",
                state.form.power,
                state.form.mode.map(|m| m.wire_code())
            );
            UpdateResult::action(UpdateAction::Publish { payload })
        }
        Err(err) => {
            warn!("command encoding failed: {}", err);
            state.push_notice(lumen_core::Notice::error(format!(
                "could not encode command: {err}"
            )));
            UpdateResult::none()
        }
    }
}
