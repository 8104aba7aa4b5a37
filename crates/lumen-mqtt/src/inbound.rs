//! Inbound payload dispatch
//!
//! The device publishes JSON objects with an `error` or `info` string key on
//! the configured message topic. Anything else still produces a notice --
//! inbound traffic is never silently dropped.

use lumen_core::Notice;

/// Map an inbound publish to the notice shown to the user.
///
/// On the known message topic:
/// - `{"error": ...}` becomes an error notice with the message text
/// - `{"info": ...}` becomes an info notice
/// - a JSON object with neither key reports `no message key found`
/// - an empty or unparseable payload reports `no message object found`
///
/// Messages on any other topic are surfaced verbatim as info notices, so a
/// firmware that grows new topics stays visible without a panel update.
pub fn notice_for_message(message_topic: &str, topic: &str, payload: &[u8]) -> Notice {
    if topic != message_topic {
        return Notice::info(String::from_utf8_lossy(payload).into_owned());
    }

    let value: serde_json::Value = match serde_json::from_slice(payload) {
        Ok(value) => value,
        Err(_) => return Notice::error("no message object found"),
    };

    match value {
        serde_json::Value::Null => Notice::error("no message object found"),
        serde_json::Value::Object(map) => {
            if let Some(error) = map.get("error") {
                Notice::error(stringify(error))
            } else if let Some(info) = map.get("info") {
                Notice::info(stringify(info))
            } else {
                Notice::error("no message key found")
            }
        }
        _ => Notice::error("no message key found"),
    }
}

/// String keys come through as-is; anything else keeps its JSON rendering.
fn stringify(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::NoticeLevel;

    const TOPIC: &str = "rgb/error";

    #[test]
    fn test_error_key_becomes_error_notice() {
        let notice = notice_for_message(TOPIC, TOPIC, br#"{"error":"overheat"}"#);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("overheat"));
    }

    #[test]
    fn test_info_key_becomes_info_notice() {
        let notice = notice_for_message(TOPIC, TOPIC, br#"{"info":"mode applied"}"#);
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.text, "mode applied");
    }

    #[test]
    fn test_error_key_wins_over_info() {
        let notice = notice_for_message(TOPIC, TOPIC, br#"{"info":"ok","error":"bad password"}"#);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "bad password");
    }

    #[test]
    fn test_object_without_known_key() {
        let notice = notice_for_message(TOPIC, TOPIC, br#"{"status":"warm"}"#);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "no message key found");
    }

    #[test]
    fn test_malformed_payload() {
        let notice = notice_for_message(TOPIC, TOPIC, b"{nope");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "no message object found");
    }

    #[test]
    fn test_empty_payload() {
        let notice = notice_for_message(TOPIC, TOPIC, b"");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "no message object found");
    }

    #[test]
    fn test_null_payload() {
        let notice = notice_for_message(TOPIC, TOPIC, b"null");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "no message object found");
    }

    #[test]
    fn test_foreign_topic_is_plain_info() {
        let notice = notice_for_message(TOPIC, "rgb/telemetry", b"uptime 3600");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.text, "uptime 3600");
    }

    #[test]
    fn test_non_string_error_value_keeps_json_rendering() {
        let notice = notice_for_message(TOPIC, TOPIC, br#"{"error":{"code":7}}"#);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("\"code\":7"));
    }
}
