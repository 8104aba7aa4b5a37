//! Broker link event handling
//!
//! Every failure class the link reports becomes a transient notice; none of
//! them disturb the form. Inbound device messages arrive pre-parsed as the
//! notice to display.

use lumen_core::prelude::*;
use lumen_core::Notice;
use lumen_mqtt::{ConnectionState, LinkEvent};

use crate::state::AppState;

use super::UpdateResult;

/// Fold a link event into the application state.
pub(crate) fn handle_link_event(state: &mut AppState, event: LinkEvent) -> UpdateResult {
    match event {
        LinkEvent::Connected => {
            state.link = ConnectionState::Connected;
        }

        LinkEvent::Subscribed => {
            debug!("subscribed to message topic");
        }

        LinkEvent::SubscribeFailed { reason } => {
            state.push_notice(Notice::error(format!("subscribe failed: {reason}")));
        }

        LinkEvent::Reconnecting { attempt } => {
            state.link = ConnectionState::Reconnecting { attempt };
            // One notice when the connection drops; the status bar tracks
            // the rest of the retry ladder.
            if attempt == 1 {
                state.push_notice(Notice::error("connection lost, reconnecting"));
            }
        }

        LinkEvent::GaveUp => {
            state.link = ConnectionState::Disconnected;
            state.push_notice(Notice::error(
                "gave up reconnecting to the broker; restart to retry",
            ));
        }

        LinkEvent::Inbound { topic, notice } => {
            debug!("inbound message on '{}'", topic);
            state.push_notice(notice);
        }

        LinkEvent::PublishFailed { reason } => {
            state.push_notice(Notice::error(format!("got error submitting: {reason}")));
        }
    }

    UpdateResult::none()
}
