//! Core Types for catcher-sim
//!
//! Minimal, unified types for corpus-driven request emission.
//! Types are co-located here as the single source of truth.

use std::time::Duration;

use serde::Serialize;

/// Default delay applied after each emitted request.
pub const DEFAULT_PAUSE_MS: u64 = 500;

/// Reduced delay used by the rapid-fire burst entries.
pub const BURST_PAUSE_MS: u64 = 100;

/// A single fully-specified request shape in the catalog.
///
/// Everything in here is emitted literally. The path and header values go
/// out byte-for-byte; the emitter never re-encodes, normalizes, or validates
/// them. Fidelity to the literal shape is the entire point of a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRequest {
    /// Human-readable label shown in progress output
    pub label: &'static str,

    /// Method token; non-standard tokens such as "CUSTOM" are allowed
    pub method: &'static str,

    /// Raw path + query, appended verbatim after the bucket segment.
    /// May intentionally contain `%XX` sequences, `..` segments, or
    /// doubled slashes.
    pub path: String,

    /// Ordered header pairs. Names keep the case they were written with;
    /// a name appears at most once (the transport cannot emit true
    /// duplicate header names).
    pub headers: Vec<(String, String)>,

    /// `None` = no body at all, `Some(empty)` = present-but-empty.
    /// The two produce distinct wire shapes.
    pub body: Option<Vec<u8>>,

    /// Delay applied after this request is emitted
    pub pause_ms: u64,
}

impl ScenarioRequest {
    pub fn new(label: &'static str, method: &'static str, path: impl Into<String>) -> Self {
        Self {
            label,
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
            pause_ms: DEFAULT_PAUSE_MS,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = Some(bytes.into());
        self
    }

    /// JSON body with the plain `application/json` content type. Scenarios
    /// that need a charset parameter set the header themselves.
    pub fn json(self, value: &serde_json::Value) -> Self {
        self.header("Content-Type", "application/json")
            .body(value.to_string())
    }

    pub fn pause_ms(mut self, ms: u64) -> Self {
        self.pause_ms = ms;
        self
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// A named, password-protected bucket on the catcher.
///
/// Created once per run. The catcher owns the bucket's lifecycle; this
/// crate never deletes it.
#[derive(Debug, Clone)]
pub struct BucketHandle {
    pub name: String,
    pub password: String,
}

impl BucketHandle {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    /// URL of the catcher's bucket viewer for this bucket.
    pub fn viewer_url(&self, base_url: &str) -> String {
        format!(
            "{}/ui/bucket.html?name={}&password={}",
            base_url.trim_end_matches('/'),
            self.name,
            self.password
        )
    }
}

/// Outcome of a single scenario delivery.
///
/// All three variants count as "emission attempted". The asymmetry with
/// bucket provisioning is deliberate: a scenario exists to land bytes on the
/// catcher's capture layer, and several catalog entries (CONNECT, TRACE,
/// upgrade handshakes) are expected to confuse client-side response
/// handling without the catcher missing the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The catcher answered with a readable response
    Delivered(u16),
    /// Bytes went out but no readable response came back (timeout,
    /// unusual method, upgrade handshake)
    ResponseUnreadable,
    /// The connection could not be established at all
    Unreachable,
}

/// Final report for one emission run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Scenarios emitted; equals the catalog length on a completed run
    pub emitted: u64,
    pub delivered: u64,
    pub unreadable: u64,
    pub unreachable: u64,
    pub elapsed: Duration,
    pub viewer_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_url_format() {
        let bucket = BucketHandle::new("demo", "secret123");
        assert_eq!(
            bucket.viewer_url("http://localhost:9090"),
            "http://localhost:9090/ui/bucket.html?name=demo&password=secret123"
        );
    }

    #[test]
    fn test_viewer_url_trims_trailing_slash() {
        let bucket = BucketHandle::new("demo", "secret123");
        assert_eq!(
            bucket.viewer_url("http://localhost:9090/"),
            "http://localhost:9090/ui/bucket.html?name=demo&password=secret123"
        );
    }

    #[test]
    fn test_builder_preserves_header_order_and_case() {
        let scenario = ScenarioRequest::new("case test", "POST", "/api/case-test")
            .header("content-type", "application/json")
            .header("ACCEPT", "application/json")
            .header("X-Custom-Header", "MixedCase");

        let names: Vec<&str> = scenario.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["content-type", "ACCEPT", "X-Custom-Header"]);
    }

    #[test]
    fn test_empty_body_is_distinct_from_absent_body() {
        let absent = ScenarioRequest::new("absent", "POST", "/api/ping");
        let empty = ScenarioRequest::new("empty", "POST", "/api/empty").body(Vec::new());

        assert!(absent.body.is_none());
        assert_eq!(empty.body.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let scenario = ScenarioRequest::new("json", "POST", "/api/users")
            .json(&serde_json::json!({"username": "john_doe"}));

        assert_eq!(
            scenario.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert!(scenario.body.is_some());
    }
}
