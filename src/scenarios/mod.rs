//! Scenario Catalog
//!
//! The fixed, hand-curated corpus of request shapes fired at the catcher:
//! - **methods**: every standard HTTP method plus non-standard tokens
//! - **bodies**: structured payloads (JSON, forms, multipart, binary, XML, RPC)
//! - **headers**: header edge cases (auth, conditional, ranges, CORS, proxies)
//! - **paths**: path and query-string edge cases
//! - **encodings**: charset edge cases and the rapid-fire burst
//!
//! The catalog is data, not logic: a new scenario is a new entry in one of
//! the category modules, never a new code path in the emitter. Ordering
//! matters only for readability of the live run; every scenario is
//! independent of the others.

pub mod bodies;
pub mod encodings;
pub mod headers;
pub mod methods;
pub mod paths;

use crate::core::ScenarioRequest;

/// The full ordered catalog.
pub fn catalog() -> Vec<ScenarioRequest> {
    let mut all = Vec::new();
    all.extend(methods::scenarios());
    all.extend(bodies::scenarios());
    all.extend(headers::scenarios());
    all.extend(paths::scenarios());
    all.extend(encodings::scenarios());
    all
}

/// Category names and descriptions for the `--list` output.
pub fn list_categories() -> Vec<(&'static str, &'static str)> {
    vec![
        ("methods", "Every standard HTTP method plus non-standard tokens"),
        ("bodies", "Structured payloads: JSON, forms, multipart, binary, XML, RPC"),
        ("headers", "Header edge cases: auth, conditional, ranges, CORS, proxies"),
        ("paths", "Path and query-string edge cases"),
        ("encodings", "Charset edge cases and the rapid-fire burst"),
    ]
}
