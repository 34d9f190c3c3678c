//! HTTP Method Diversity Scenarios
//!
//! One representative request per method, including the rarely-used
//! tunneling/diagnostic methods and a non-standard token. CONNECT and TRACE
//! are expected to upset client libraries; the catcher should capture them
//! regardless.

use serde_json::json;

use crate::core::ScenarioRequest;

pub fn scenarios() -> Vec<ScenarioRequest> {
    vec![
        ScenarioRequest::new(
            "GET with query parameters",
            "GET",
            "/api/users?id=123&name=John&active=true",
        )
        .header("User-Agent", "TestClient/1.0")
        .header("Authorization", "Bearer token123"),
        ScenarioRequest::new("POST with JSON body", "POST", "/api/users")
            .header("X-Request-ID", "req-001")
            .json(&json!({
                "username": "john_doe",
                "email": "john@example.com",
                "age": 30,
                "active": true,
                "roles": ["user", "admin"],
                "metadata": {"created": "2024-01-01", "lastLogin": "2024-01-15"}
            })),
        ScenarioRequest::new("PUT with nested JSON", "PUT", "/api/users/123").json(&json!({
            "profile": {
                "firstName": "John",
                "lastName": "Doe",
                "address": {
                    "street": "123 Main St",
                    "city": "San Francisco",
                    "state": "CA",
                    "zip": "94102"
                }
            },
            "preferences": {"theme": "dark", "notifications": true}
        })),
        ScenarioRequest::new("PATCH single field", "PATCH", "/api/users/123")
            .json(&json!({"email": "newemail@example.com"})),
        ScenarioRequest::new("DELETE with query reason", "DELETE", "/api/users/123?reason=inactive")
            .header("X-Admin-Key", "admin123"),
        ScenarioRequest::new("HEAD status probe", "HEAD", "/api/status"),
        ScenarioRequest::new("OPTIONS CORS preflight", "OPTIONS", "/api/users")
            .header("Origin", "https://example.com")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "Content-Type"),
        ScenarioRequest::new("TRACE diagnostic", "TRACE", "/api/trace")
            .header("Max-Forwards", "10"),
        ScenarioRequest::new("CONNECT tunneling", "CONNECT", "/api/proxy")
            .header("Host", "example.com:443"),
        ScenarioRequest::new("CUSTOM non-standard method", "CUSTOM", "/api/custom")
            .header("X-Custom-Method", "true"),
        ScenarioRequest::new("minimal GET, no headers", "GET", "/api/minimal"),
    ]
}
