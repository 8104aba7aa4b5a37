//! OS signal handling
//!
//! Termination signals are folded into the normal message flow as
//! `Message::Quit`, so the terminal is restored on the same shutdown path as
//! a keyboard quit.

use tokio::sync::mpsc;

use lumen_core::prelude::*;

use crate::message::Message;

/// Spawn the task that waits for a termination signal and queues a quit.
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(()) => {
                info!("termination signal received");
                let _ = msg_tx.send(Message::Quit).await;
            }
            Err(err) => error!("signal handler failed: {}", err),
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => {}
        _ = sigterm.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_does_not_send_without_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        spawn_signal_handler(tx);

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
