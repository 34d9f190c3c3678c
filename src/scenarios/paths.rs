//! Path and Query-String Edge-Case Scenarios
//!
//! Every path here is appended to the bucket URL byte-for-byte. Dot
//! segments, doubled slashes, and percent-encoded sequences are the point
//! of the scenario, so nothing in the emitter may rewrite them.

use crate::core::ScenarioRequest;

pub fn scenarios() -> Vec<ScenarioRequest> {
    vec![
        ScenarioRequest::new("many query parameters", "GET", "/api/search?q=test&page=1&limit=10&sort=name&order=asc&filter=active&category=electronics")
            .header("Accept", "application/json"),
        ScenarioRequest::new("percent-encoded path segment", "GET", "/api/files/my%20document.pdf?version=2"),
        ScenarioRequest::new("fully-quoted special characters", "GET", "/api/files/my%20file%20%28v2%29%20%5Bfinal%5D.pdf")
            .header("Accept", "application/pdf"),
        very_long_query(),
        ScenarioRequest::new("empty query parameter values", "GET", "/api/search?keyword=&category=&page=1&limit=")
            .header("Accept", "application/json"),
        ScenarioRequest::new("valueless query parameters", "GET", "/api/filter?active&verified&premium")
            .header("Accept", "application/json"),
        ScenarioRequest::new("array-notation query keys", "GET", "/api/items?ids[]=1&ids[]=2&ids[]=3&tags[]=urgent&tags[]=bug")
            .header("Accept", "application/json"),
        ScenarioRequest::new("root path", "GET", "/").header("Accept", "text/html"),
        ScenarioRequest::new("doubled slashes", "GET", "/api//users//123")
            .header("Accept", "application/json"),
        ScenarioRequest::new("dot segments", "GET", "/api/../users/./123")
            .header("Accept", "application/json"),
        ScenarioRequest::new("trailing slash", "GET", "/api/users/")
            .header("Accept", "application/json"),
        ScenarioRequest::new("query string on root path", "GET", "/?query=test&action=search")
            .header("Accept", "application/json"),
    ]
}

/// Fifty generated parameters; tens-of-parameters query strings are their
/// own rendering problem.
fn very_long_query() -> ScenarioRequest {
    let query: Vec<String> = (0..50).map(|i| format!("param{i}=value{i}")).collect();
    ScenarioRequest::new(
        "very long query string (50 parameters)",
        "GET",
        format!("/api/search?{}", query.join("&")),
    )
    .header("Accept", "application/json")
}
