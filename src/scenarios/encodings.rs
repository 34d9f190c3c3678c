//! Encoding Edge Cases and the Rapid-Fire Burst
//!
//! Charset variety (UTF-8 with multibyte content, Latin-1, UTF-16), the
//! empty-vs-absent body pair, and a short burst of minimally paced requests
//! to exercise the catcher under closely spaced arrivals.

use serde_json::json;

use crate::core::{BURST_PAUSE_MS, ScenarioRequest};

/// Number of requests in the rapid-fire burst.
pub const BURST_LEN: usize = 5;

pub fn scenarios() -> Vec<ScenarioRequest> {
    let mut all = vec![
        ScenarioRequest::new("POST with no body at all", "POST", "/api/ping"),
        ScenarioRequest::new("POST with explicit empty body", "POST", "/api/empty")
            .header("Content-Type", "application/json")
            .body(Vec::new()),
        special_characters_utf8(),
        ScenarioRequest::new("ISO-8859-1 body", "POST", "/api/encoding/latin1")
            .header("Content-Type", "text/plain; charset=ISO-8859-1")
            .body(
                &b"H\xe9llo W\xf6rld with sp\xebcial \xe7haracters"[..],
            ),
        ScenarioRequest::new("UTF-16 body", "POST", "/api/encoding/utf16")
            .header("Content-Type", "text/plain; charset=UTF-16")
            .body(utf16_le("UTF-16 encoded text: 你好世界")),
    ];

    for seq in 0..BURST_LEN {
        all.push(
            ScenarioRequest::new("rapid-fire burst", "GET", format!("/api/ping?seq={seq}"))
                .header("X-Sequence", seq.to_string())
                .pause_ms(BURST_PAUSE_MS),
        );
    }

    all
}

fn special_characters_utf8() -> ScenarioRequest {
    ScenarioRequest::new("UTF-8 special characters", "POST", "/api/special-chars")
        .header("Content-Type", "application/json; charset=utf-8")
        .body(
            json!({
                "text": "Special chars: émojis 🎉🚀💻, quotes \"'`, newlines\n\ntabs\t\there",
                "unicode": "Unicode: 日本語, العربية, हिन्दी, Ελληνικά",
                "symbols": "Symbols: ©®™€£¥§¶†‡",
                "math": "Math: ∑∫∂√∞≠≤≥±×÷"
            })
            .to_string(),
        )
}

/// Little-endian UTF-16 with a BOM, the layout the reference payload used.
fn utf16_le(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_paths_carry_their_sequence_number() {
        let burst: Vec<_> = scenarios()
            .into_iter()
            .filter(|s| s.label == "rapid-fire burst")
            .collect();
        assert_eq!(burst.len(), BURST_LEN);
        for (seq, scenario) in burst.iter().enumerate() {
            assert_eq!(scenario.path, format!("/api/ping?seq={seq}"));
            assert_eq!(scenario.pause_ms, BURST_PAUSE_MS);
        }
    }

    #[test]
    fn test_utf16_body_starts_with_le_bom() {
        let bytes = utf16_le("abc");
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
        assert_eq!(&bytes[2..4], &[b'a', 0x00]);
    }

    #[test]
    fn test_latin1_body_is_not_valid_utf8() {
        let scenario = scenarios()
            .into_iter()
            .find(|s| s.label == "ISO-8859-1 body")
            .unwrap();
        assert!(String::from_utf8(scenario.body.unwrap()).is_err());
    }

    #[test]
    fn test_utf8_body_round_trips_through_json() {
        let scenario = special_characters_utf8();
        let body: serde_json::Value =
            serde_json::from_slice(scenario.body.as_deref().unwrap()).unwrap();
        assert!(body["text"].as_str().unwrap().contains("🎉"));
        assert!(body["unicode"].as_str().unwrap().contains("日本語"));
    }
}
