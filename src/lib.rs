//! Lumen Library
//!
//! A TUI control panel that publishes commands over MQTT to a remote RGB
//! lighting controller. This crate wires the pieces together: the broker
//! link, the TEA update loop, and the terminal renderer.

use tokio::sync::mpsc;

use lumen_app::message::Message;
use lumen_app::state::AppState;
use lumen_app::{process, signals};
use lumen_core::prelude::*;
use lumen_mqtt::{BrokerConfig, BrokerLink, PublishHandle};
use lumen_tui::{event, terminal, view};

/// Run the control panel against the configured broker.
pub async fn run(config: BrokerConfig) -> Result<()> {
    // Restore the terminal even if we panic mid-draw
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    let mut state = AppState::new();

    // Unified message channel: signal handler and publish failures feed the
    // same loop as keyboard input
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());

    // Open the broker link; connecting happens on its background task and
    // failures surface as notices, never as startup errors.
    let mut link = BrokerLink::open(config);
    let publish = link.publish_handle();

    let result = run_loop(&mut term, &mut state, &mut link, msg_rx, msg_tx, publish);

    // Tear the link down before giving the terminal back
    link.disconnect().await;
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    link: &mut BrokerLink,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    publish: PublishHandle,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (signal handler, publish failures)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &publish);
        }

        // Process link events (non-blocking)
        while let Ok(event) = link.event_receiver().try_recv() {
            process::process_message(state, Message::Link(event), &msg_tx, &publish);
        }

        // Render
        terminal.draw(|frame| view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &publish);
        }
    }

    Ok(())
}
