//! The message alphabet of the update loop

use crate::input_key::InputKey;
use lumen_mqtt::LinkEvent;

/// Everything that can happen to the application, from any source.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press from the terminal.
    Key(InputKey),

    /// An event from the broker link's background task.
    Link(LinkEvent),

    /// Periodic tick; drives notice expiry.
    Tick,

    /// Encode the current form and publish it.
    Submit,

    /// Shut the application down.
    Quit,
}
