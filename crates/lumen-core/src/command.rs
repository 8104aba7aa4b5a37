//! Wire-command encoding
//!
//! Maps the validated form state into the compact JSON payload the device
//! firmware parses. Keys are single characters to keep the payload small on
//! constrained links.

use serde::Serialize;

use crate::types::{FormState, Mode};

/// Color as transmitted: integer channels, alpha already inverted to a byte.
#[derive(Debug, Serialize)]
struct WireColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

/// The full command payload.
///
/// Field order is fixed so payloads are stable across runs:
/// `o` power, `m` mode code, `c` color, `p` password, `s` speed,
/// `f` pulse period, `b` brightness.
#[derive(Debug, Serialize)]
struct WireCommand<'a> {
    o: bool,
    m: &'static str,
    c: WireColor,
    p: &'a str,
    s: f64,
    f: f64,
    b: u8,
}

/// Encode the form state into the control-topic payload.
///
/// Callers gate on `form_valid` and a selected mode before encoding; the
/// encoder performs no validation of its own. A missing mode encodes as an
/// empty mode code rather than an error.
pub fn encode(state: &FormState) -> serde_json::Result<String> {
    let command = WireCommand {
        o: state.power,
        m: state.mode.map_or("", Mode::wire_code),
        c: WireColor {
            r: state.color.r,
            g: state.color.g,
            b: state.color.b,
            a: state.color.wire_alpha(),
        },
        p: &state.password,
        s: state.speed,
        f: state.pulse,
        b: state.brightness,
    };
    serde_json::to_string(&command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    fn powered_form(mode: Mode) -> FormState {
        let mut form = FormState::default();
        form.set_password("abcdef");
        form.set_power(true);
        form.select_mode(mode);
        form
    }

    #[test]
    fn test_encode_field_layout() {
        let mut form = powered_form(Mode::Rainbow);
        form.set_speed(4.0);
        form.set_brightness(128);

        let payload = encode(&form).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(value["o"], true);
        assert_eq!(value["m"], "r");
        assert_eq!(value["p"], "abcdef");
        assert_eq!(value["s"], 4.0);
        assert_eq!(value["f"], 0.0);
        assert_eq!(value["b"], 128);
        assert_eq!(value["c"]["r"], 255);
        assert_eq!(value["c"]["g"], 255);
        assert_eq!(value["c"]["b"], 255);
    }

    #[test]
    fn test_encode_inverts_alpha() {
        let mut form = powered_form(Mode::Color);
        form.set_color(Rgba::new(0, 255, 233, 1.0));
        let value: serde_json::Value =
            serde_json::from_str(&encode(&form).unwrap()).unwrap();
        assert_eq!(value["c"]["a"], 0);

        form.set_color(Rgba::new(0, 255, 233, 0.0));
        let value: serde_json::Value =
            serde_json::from_str(&encode(&form).unwrap()).unwrap();
        assert_eq!(value["c"]["a"], 255);
    }

    #[test]
    fn test_encode_key_order_is_stable() {
        let form = powered_form(Mode::Color);
        let payload = encode(&form).unwrap();
        let o = payload.find("\"o\"").unwrap();
        let m = payload.find("\"m\"").unwrap();
        let c = payload.find("\"c\"").unwrap();
        let b = payload.rfind("\"b\"").unwrap();
        assert!(o < m && m < c && c < b);
    }
}
