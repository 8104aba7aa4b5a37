//! Message processing and action dispatch
//!
//! Drives the TEA update loop and hands publish actions to the broker link.
//! Publishes are fire-and-forget: the spawned task reports a failure back
//! into the message channel, where it surfaces as a notice like any other
//! link error.

use tokio::sync::mpsc;

use lumen_mqtt::{LinkEvent, PublishHandle};

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up messages
/// and dispatching actions.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    publish: &PublishHandle,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), publish.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Perform an action outside the update function.
fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, publish: PublishHandle) {
    match action {
        UpdateAction::Publish { payload } => {
            tokio::spawn(async move {
                if let Err(err) = publish.publish(payload).await {
                    let _ = msg_tx.try_send(Message::Link(LinkEvent::PublishFailed {
                        reason: err.to_string(),
                    }));
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use lumen_core::Mode;

    #[tokio::test]
    async fn test_publish_failure_feeds_back_into_the_loop() {
        let mut state = AppState::new();
        state.form.set_password("abcdef");
        state.form.set_power(true);
        state.form.select_mode(Mode::Color);

        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        // Test handle: its backing task is already gone, so the publish
        // fails with a closed channel.
        let publish = PublishHandle::new_for_test();

        process_message(&mut state, Message::Submit, &msg_tx, &publish);

        let msg = tokio::time::timeout(std::time::Duration::from_secs(1), msg_rx.recv())
            .await
            .expect("publish failure should be reported")
            .expect("message channel open");
        assert!(matches!(
            msg,
            Message::Link(LinkEvent::PublishFailed { .. })
        ));
    }
}
