//! Async MQTT client for the lighting controller's broker.
//!
//! The [`BrokerLink`] owns the single broker connection. A background tokio
//! task drives the rumqttc event loop, keeps the connection alive with
//! capped exponential backoff, subscribes to the device's message topic, and
//! forwards everything the UI cares about as [`LinkEvent`]s through an mpsc
//! channel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       BrokerLink                            │
//! │                                                             │
//! │  ┌──────────────┐        ┌──────────────────────────────┐   │
//! │  │  Public API  │        │   Background Task            │   │
//! │  │              │        │                              │   │
//! │  │  publish() ──┼──cmd──▶│  rumqttc event loop          │   │
//! │  │              │  chan  │                              │   │
//! │  │  events()  ◀─┼──evt──◀│  ConnAck → subscribe         │   │
//! │  │              │  chan  │  Publish → notice dispatch   │   │
//! │  └──────────────┘        │  Error   → backoff + retry   │   │
//! │                          └──────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures are never fatal to the UI: every connect, subscribe, and publish
//! problem is delivered as an event and rendered as a transient notice.

use std::sync::Arc;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS, SubscribeReasonCode};
use tokio::sync::mpsc;

use lumen_core::prelude::*;
use lumen_core::Notice;

use crate::config::{random_client_id, BrokerConfig};
use crate::inbound::notice_for_message;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Initial reconnection backoff duration.
const INITIAL_BACKOFF: Duration = Duration::from_millis(1000);

/// Maximum reconnection backoff duration (cap).
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Maximum number of consecutive reconnection attempts before giving up.
const MAX_RECONNECT_ATTEMPTS: u32 = 10;

/// Capacity of the command channel (bounded, to apply backpressure).
const CMD_CHANNEL_CAPACITY: usize = 32;

/// Capacity of the event channel (bounded, inbound traffic can be bursty).
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Capacity of rumqttc's internal request queue.
const REQUEST_QUEUE_CAPACITY: usize = 10;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Current connection state of a [`BrokerLink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected and not attempting to connect.
    Disconnected,
    /// Initial connection attempt in progress.
    Connecting,
    /// Connected and ready to exchange messages.
    Connected,
    /// Connection lost; background task is retrying.
    Reconnecting {
        /// The current reconnection attempt number (1-indexed).
        attempt: u32,
    },
}

impl ConnectionState {
    /// Short human-readable label for the status bar.
    pub fn label(&self) -> String {
        match self {
            ConnectionState::Disconnected => "Disconnected".to_string(),
            ConnectionState::Connecting => "Connecting".to_string(),
            ConnectionState::Connected => "Connected".to_string(),
            ConnectionState::Reconnecting { attempt } => {
                format!("Reconnecting ({attempt}/{MAX_RECONNECT_ATTEMPTS})")
            }
        }
    }

    /// Returns `true` when the status indicates some form of connectivity
    /// loss.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, ConnectionState::Connected)
    }
}

/// Events the background task delivers to the UI loop.
#[derive(Debug, Clone)]
pub enum LinkEvent {
    /// Broker accepted the connection (initial or after a reconnect).
    Connected,
    /// Subscription to the message topic acknowledged.
    Subscribed,
    /// Subscribe request failed or the broker refused it. Not retried.
    SubscribeFailed { reason: String },
    /// Connection lost; retry scheduled.
    Reconnecting { attempt: u32 },
    /// Retries exhausted; the link stays down for the rest of the session.
    GaveUp,
    /// An inbound publish, already mapped to the notice to display.
    Inbound { topic: String, notice: Notice },
    /// A queued publish could not be handed to the broker.
    PublishFailed { reason: String },
}

// ---------------------------------------------------------------------------
// Internal command type
// ---------------------------------------------------------------------------

/// Messages sent from the public API to the background task.
enum LinkCommand {
    /// Publish `payload` on the control topic, fire-and-forget.
    Publish { payload: String },
    /// Gracefully close the connection and stop the background task.
    Disconnect,
}

type SharedState = Arc<std::sync::RwLock<ConnectionState>>;

fn set_state(state: &SharedState, next: ConnectionState) {
    *state.write().unwrap_or_else(|e| e.into_inner()) = next;
}

// ---------------------------------------------------------------------------
// PublishHandle
// ---------------------------------------------------------------------------

/// A clonable handle for publishing commands over the shared connection.
///
/// The handle becomes inoperable when the [`BrokerLink`] (or its background
/// task) is gone -- sends then return [`Error::ChannelClosed`].
#[derive(Clone)]
pub struct PublishHandle {
    cmd_tx: mpsc::Sender<LinkCommand>,
    state: SharedState,
}

impl std::fmt::Debug for PublishHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner()).clone();
        f.debug_struct("PublishHandle")
            .field("connection_state", &state)
            .finish()
    }
}

impl PublishHandle {
    /// Queue a payload for the control topic.
    ///
    /// Fire-and-forget: a successful return only means the command reached
    /// the background task. Delivery problems come back asynchronously as
    /// [`LinkEvent::PublishFailed`].
    pub async fn publish(&self, payload: String) -> Result<()> {
        self.cmd_tx
            .send(LinkCommand::Publish { payload })
            .await
            .map_err(|_| Error::ChannelClosed)
    }

    /// Return the current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Return `true` if the link is currently connected.
    pub fn is_connected(&self) -> bool {
        *self.state.read().unwrap_or_else(|e| e.into_inner()) == ConnectionState::Connected
    }

    /// Create a `PublishHandle` backed by a disconnected dummy channel.
    ///
    /// Intended for unit tests that need a handle but no real broker.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn new_for_test() -> Self {
        let (cmd_tx, _cmd_rx) = mpsc::channel(1);
        Self {
            cmd_tx,
            state: Arc::new(std::sync::RwLock::new(ConnectionState::Connected)),
        }
    }
}

// ---------------------------------------------------------------------------
// BrokerLink
// ---------------------------------------------------------------------------

/// The single MQTT connection to the lighting controller's broker.
///
/// Create with [`BrokerLink::open`]; the call never fails -- connecting
/// happens on the background task, and a broker that is down simply shows
/// up as `Reconnecting` state and notices. Consume [`LinkEvent`]s through
/// [`event_receiver`](Self::event_receiver) and publish through a
/// [`PublishHandle`].
pub struct BrokerLink {
    /// Shared publish handle -- owns the cmd_tx and state.
    handle: PublishHandle,
    /// Link-event receiver (not clonable; owned exclusively by this link).
    event_rx: mpsc::Receiver<LinkEvent>,
}

impl BrokerLink {
    /// Open the link and spawn the background client task.
    pub fn open(config: BrokerConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<LinkCommand>(CMD_CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel::<LinkEvent>(EVENT_CHANNEL_CAPACITY);
        let state: SharedState = Arc::new(std::sync::RwLock::new(ConnectionState::Connecting));

        info!(
            "Opening MQTT link to {}:{} (control='{}', messages='{}')",
            config.host, config.port, config.control_topic, config.message_topic
        );

        let state_clone = Arc::clone(&state);
        tokio::spawn(run_link_task(config, cmd_rx, event_tx, state_clone));

        Self {
            handle: PublishHandle { cmd_tx, state },
            event_rx,
        }
    }

    /// Create a clonable publish handle that shares this link's connection.
    pub fn publish_handle(&self) -> PublishHandle {
        self.handle.clone()
    }

    /// Return a mutable reference to the link-event receiver.
    pub fn event_receiver(&mut self) -> &mut mpsc::Receiver<LinkEvent> {
        &mut self.event_rx
    }

    /// Return the current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.handle.connection_state()
    }

    /// Gracefully close the connection.
    ///
    /// Sends a disconnect command to the background task and returns
    /// immediately.
    pub async fn disconnect(&self) {
        // Ignore the send error -- if the channel is already closed the task
        // has already exited.
        let _ = self.handle.cmd_tx.send(LinkCommand::Disconnect).await;
    }
}

// ---------------------------------------------------------------------------
// Background task
// ---------------------------------------------------------------------------

/// Build rumqttc options from the broker configuration.
fn mqtt_options(config: &BrokerConfig) -> MqttOptions {
    let mut options = MqttOptions::new(random_client_id(), &config.host, config.port);
    options.set_keep_alive(Duration::from_secs(config.keep_alive_secs));
    options.set_clean_session(config.clean_session);
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        options.set_credentials(username, password);
    }
    options
}

/// Entry point for the background MQTT I/O task.
///
/// Drives the rumqttc event loop, which re-dials the broker each time
/// `poll()` is called after a failure. Consecutive failures back off
/// exponentially up to [`MAX_BACKOFF`]; after [`MAX_RECONNECT_ATTEMPTS`]
/// failures in a row the task reports [`LinkEvent::GaveUp`] and exits.
async fn run_link_task(
    config: BrokerConfig,
    mut cmd_rx: mpsc::Receiver<LinkCommand>,
    event_tx: mpsc::Sender<LinkEvent>,
    state: SharedState,
) {
    let (client, mut event_loop) = AsyncClient::new(mqtt_options(&config), REQUEST_QUEUE_CAPACITY);

    // Consecutive connection failures; reset on every successful ConnAck.
    let mut attempt: u32 = 0;

    loop {
        tokio::select! {
            // ── Broker traffic ──────────────────────────────────────────
            polled = event_loop.poll() => {
                match polled {
                    Ok(Event::Incoming(Packet::ConnAck(_))) => {
                        info!("MQTT link: connected to {}:{}", config.host, config.port);
                        attempt = 0;
                        set_state(&state, ConnectionState::Connected);
                        send_event(&event_tx, LinkEvent::Connected);

                        // A fresh connection has no subscriptions; restore
                        // the message-topic subscription every time.
                        if let Err(err) = client
                            .subscribe(&config.message_topic, QoS::AtMostOnce)
                            .await
                        {
                            warn!(
                                "MQTT link: subscribe to '{}' failed: {}",
                                config.message_topic, err
                            );
                            send_event(
                                &event_tx,
                                LinkEvent::SubscribeFailed {
                                    reason: err.to_string(),
                                },
                            );
                        }
                    }
                    Ok(Event::Incoming(Packet::SubAck(ack))) => {
                        let refused = ack
                            .return_codes
                            .iter()
                            .any(|code| matches!(code, SubscribeReasonCode::Failure));
                        if refused {
                            warn!(
                                "MQTT link: broker refused subscription to '{}'",
                                config.message_topic
                            );
                            send_event(
                                &event_tx,
                                LinkEvent::SubscribeFailed {
                                    reason: "broker refused the subscription".to_string(),
                                },
                            );
                        } else {
                            debug!("MQTT link: subscribed to '{}'", config.message_topic);
                            send_event(&event_tx, LinkEvent::Subscribed);
                        }
                    }
                    Ok(Event::Incoming(Packet::Publish(publish))) => {
                        debug!(
                            "MQTT link: inbound on '{}' ({} bytes)",
                            publish.topic,
                            publish.payload.len()
                        );
                        let notice = notice_for_message(
                            &config.message_topic,
                            &publish.topic,
                            &publish.payload,
                        );
                        send_event(
                            &event_tx,
                            LinkEvent::Inbound {
                                topic: publish.topic.clone(),
                                notice,
                            },
                        );
                    }
                    Ok(_) => {
                        // PingResp, PubAck, outgoing echoes -- not interesting.
                    }
                    Err(err) => {
                        attempt += 1;
                        if attempt > MAX_RECONNECT_ATTEMPTS {
                            error!(
                                "MQTT link: exceeded {} reconnection attempts, giving up",
                                MAX_RECONNECT_ATTEMPTS
                            );
                            set_state(&state, ConnectionState::Disconnected);
                            send_event(&event_tx, LinkEvent::GaveUp);
                            return;
                        }

                        set_state(&state, ConnectionState::Reconnecting { attempt });
                        send_event(&event_tx, LinkEvent::Reconnecting { attempt });

                        let backoff = compute_backoff(attempt);
                        warn!(
                            "MQTT link: connection lost ({}), retrying in {:?} (attempt {}/{})",
                            err, backoff, attempt, MAX_RECONNECT_ATTEMPTS
                        );
                        tokio::time::sleep(backoff).await;
                    }
                }
            }

            // ── Commands from the public API ────────────────────────────
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(LinkCommand::Publish { payload }) => {
                        debug!("MQTT link: publish {} bytes", payload.len());
                        if let Err(err) = client
                            .publish(&config.control_topic, QoS::AtMostOnce, false, payload)
                            .await
                        {
                            warn!("MQTT link: publish failed: {}", err);
                            send_event(
                                &event_tx,
                                LinkEvent::PublishFailed {
                                    reason: err.to_string(),
                                },
                            );
                        }
                    }
                    Some(LinkCommand::Disconnect) | None => {
                        // Either an explicit disconnect or the BrokerLink was
                        // dropped -- close gracefully.
                        debug!("MQTT link: shutting down");
                        let _ = client.disconnect().await;
                        set_state(&state, ConnectionState::Disconnected);
                        return;
                    }
                }
            }
        }
    }
}

/// Forward an event without blocking the I/O loop; a full or closed channel
/// drops the event.
fn send_event(event_tx: &mpsc::Sender<LinkEvent>, event: LinkEvent) {
    if let Err(err) = event_tx.try_send(event) {
        warn!("MQTT link: event channel full or closed, dropping event: {}", err);
    }
}

/// Compute exponential backoff duration for reconnection attempt `n`.
///
/// The formula is `INITIAL_BACKOFF * 2^(n-1)`, capped at `MAX_BACKOFF`.
fn compute_backoff(attempt: u32) -> Duration {
    // 2^(attempt-1), capped to avoid overflow.
    let exponent = attempt.saturating_sub(1);
    let multiplier: u64 = 1u64.checked_shl(exponent).unwrap_or(u64::MAX);
    let millis = INITIAL_BACKOFF.as_millis() as u64;
    let backoff = millis.saturating_mul(multiplier);
    Duration::from_millis(backoff.min(MAX_BACKOFF.as_millis() as u64))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
