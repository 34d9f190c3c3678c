//! Structured Body Scenarios
//!
//! Every payload family the catcher's body rendering has to cope with:
//! JSON in several shapes, form encodings, multipart uploads, raw and
//! base64-wrapped binary, CSV, XML/SOAP, GraphQL, JSON-RPC, and a couple of
//! payloads that are deliberately broken or oversized.

use serde_json::json;

use crate::core::ScenarioRequest;

pub fn scenarios() -> Vec<ScenarioRequest> {
    vec![
        ScenarioRequest::new("flat form data", "POST", "/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(&b"username=john&password=secret123&remember=on"[..]),
        ScenarioRequest::new("plain text note", "POST", "/api/notes")
            .header("Content-Type", "text/plain")
            .body(&b"This is a plain text note without any JSON formatting."[..]),
        ScenarioRequest::new("JSON array of items", "POST", "/api/bulk-create").json(&json!({
            "items": [
                {"id": 1, "name": "Item One"},
                {"id": 2, "name": "Item Two"},
                {"id": 3, "name": "Item Three"}
            ]
        })),
        ScenarioRequest::new("analytics event batch", "POST", "/api/analytics").json(&json!({
            "timestamp": "2024-01-15T10:30:00Z",
            "events": [
                {"type": "click", "element": "button", "x": 100, "y": 200},
                {"type": "scroll", "position": 500},
                {"type": "click", "element": "link", "x": 300, "y": 400},
                {"type": "input", "field": "search", "value": "test query"},
                {"type": "click", "element": "submit", "x": 150, "y": 250}
            ],
            "session": {
                "id": "sess_abc123",
                "duration": 3600,
                "pages": ["/home", "/products", "/checkout"],
                "userAgent": "Mozilla/5.0 (compatible)"
            }
        })),
        ScenarioRequest::new("JSON scalar variety", "POST", "/api/config").json(&json!({
            "enabled": true,
            "disabled": false,
            "count": 42,
            "ratio": 3.14,
            "nullValue": null,
            "emptyString": "",
            "nested": {"value": 100, "flag": true}
        })),
        ScenarioRequest::new("webhook with event headers", "POST", "/api/webhook")
            .header("X-Webhook-ID", "hook_123")
            .header("X-Signature", "sha256=abc123def456")
            .header("X-Event-Type", "user.created")
            .header("X-Timestamp", "1642252800")
            .json(&json!({"event": "user.created", "userId": 456})),
        ScenarioRequest::new("OAuth token exchange form", "POST", "/oauth/token")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(
                &b"grant_type=authorization_code&code=AUTH123&redirect_uri=https://example.com/callback"[..],
            ),
        ScenarioRequest::new("XML document", "PUT", "/api/document")
            .header("Content-Type", "application/xml")
            .body(&b"<note><to>User</to><from>Admin</from><body>Hello World</body></note>"[..]),
        ScenarioRequest::new("error-shaped JSON", "POST", "/api/errors").json(&json!({
            "error": {
                "code": 500,
                "message": "Internal Server Error",
                "details": "Something went wrong",
                "timestamp": "2024-01-15T10:30:00Z"
            }
        })),
        multipart_pdf_upload(),
        multipart_image_upload(),
        ScenarioRequest::new("base64-wrapped binary", "POST", "/api/binary-upload")
            .header("Content-Type", "application/octet-stream")
            .header("Content-Transfer-Encoding", "base64")
            .body(&b"VGhpcyBpcyBiaW5hcnkgZGF0YTogAAECA//+/Q=="[..]),
        multipart_multi_file_upload(),
        ScenarioRequest::new("CSV upload", "POST", "/api/import/csv")
            .header("Content-Type", "text/csv")
            .header("Content-Disposition", "attachment; filename=\"users.csv\"")
            .body(
                &b"id,name,email,age\n\
                1,John Doe,john@example.com,30\n\
                2,Jane Smith,jane@example.com,25\n\
                3,Bob Johnson,bob@example.com,35\n"[..],
            ),
        large_json_payload(),
        ScenarioRequest::new("very long single line", "POST", "/api/long-line")
            .json(&json!({"data": "x".repeat(1000)})),
        ScenarioRequest::new("malformed JSON", "POST", "/api/malformed")
            .header("Content-Type", "application/json")
            .body(&br#"{"key": "value", "broken": }"#[..]),
        ScenarioRequest::new("gzip content-encoding header", "POST", "/api/compressed")
            .header("Content-Type", "application/json")
            .header("Content-Encoding", "gzip")
            .body(&b"This would be gzip compressed data in real scenario"[..]),
        ScenarioRequest::new("protobuf-shaped binary", "POST", "/api/protobuf")
            .header("Content-Type", "application/x-protobuf")
            .header("X-Proto-Version", "3")
            .body(&b"\x08\x96\x01\x12\x04John\x1a\x10john@example.com"[..]),
        ScenarioRequest::new("nested bracketed form keys", "POST", "/api/form-nested")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(
                &b"user[name]=John&user[email]=john@example.com&user[prefs][theme]=dark&user[prefs][lang]=en"[..],
            ),
        graphql_query(),
        soap_envelope(),
        ScenarioRequest::new("JSON-RPC 2.0 call", "POST", "/api/jsonrpc").json(&json!({
            "jsonrpc": "2.0",
            "method": "sum",
            "params": [42, 23],
            "id": 1
        })),
        webhook_with_signature(),
        deeply_nested_json(),
    ]
}

fn multipart_pdf_upload() -> ScenarioRequest {
    let boundary = "----WebKitFormBoundary7MA4YWxkTrZu0gW";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"title\"\r\n\r\n\
         My Document\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"description\"\r\n\r\n\
         This is a test document upload\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"document.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         %PDF-1.4 [Binary content would be here]\r\n\
         --{boundary}--\r\n"
    );

    ScenarioRequest::new("multipart file upload (PDF)", "POST", "/api/upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header("X-Upload-ID", "upload_001")
        .body(body)
}

fn multipart_image_upload() -> ScenarioRequest {
    let boundary = "----WebKitFormBoundary9XY5ZWxkTrZu1hW";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"photo.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\n\
         [JPEG binary data would be here - ÿØÿà JFIF header]\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"caption\"\r\n\r\n\
         Beautiful sunset photo\r\n\
         --{boundary}--\r\n"
    );

    ScenarioRequest::new("multipart image upload (JPEG)", "POST", "/api/photos")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header("X-Image-Type", "jpeg")
        .body(body)
}

fn multipart_multi_file_upload() -> ScenarioRequest {
    let boundary = "----WebKitFormBoundaryABC123";
    let mut body = String::new();
    for i in 1..=3 {
        body.push_str(&format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"files[]\"; filename=\"file{i}.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Content of file {i}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    ScenarioRequest::new("multipart multiple files", "POST", "/api/bulk-upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(body)
}

/// 50 items with nested metadata; the stress payload for the body viewer.
fn large_json_payload() -> ScenarioRequest {
    let items: Vec<serde_json::Value> = (0..50)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("Item {i}"),
                "description": format!("This is a detailed description for item {i}").repeat(10),
                "tags": (0..20).map(|j| format!("tag{j}")).collect::<Vec<_>>(),
                "metadata": {
                    "created": "2024-01-01T00:00:00Z",
                    "updated": "2024-01-15T10:30:00Z",
                    "views": i * 100
                }
            })
        })
        .collect();

    ScenarioRequest::new("very large JSON (50 items)", "POST", "/api/bulk-data")
        .json(&json!({"items": items}))
}

fn graphql_query() -> ScenarioRequest {
    let query = "\n\
        query GetUser($id: ID!) {\n\
            user(id: $id) {\n\
                id\n\
                name\n\
                email\n\
                posts {\n\
                    title\n\
                    content\n\
                    comments {\n\
                        author\n\
                        text\n\
                    }\n\
                }\n\
            }\n\
        }\n";

    ScenarioRequest::new("GraphQL query", "POST", "/graphql").json(&json!({
        "query": query,
        "variables": {"id": "123"},
        "operationName": "GetUser"
    }))
}

fn soap_envelope() -> ScenarioRequest {
    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Header>
        <Authentication>
            <Username>admin</Username>
            <Password>secret123</Password>
        </Authentication>
    </soap:Header>
    <soap:Body>
        <GetUserRequest xmlns="http://example.com/api">
            <UserId>12345</UserId>
            <IncludeProfile>true</IncludeProfile>
        </GetUserRequest>
    </soap:Body>
</soap:Envelope>"#;

    ScenarioRequest::new("SOAP envelope", "POST", "/api/soap")
        .header("Content-Type", "text/xml; charset=utf-8")
        .header("SOAPAction", "http://example.com/api/GetUser")
        .body(body)
}

fn webhook_with_signature() -> ScenarioRequest {
    ScenarioRequest::new("webhook with signature headers", "POST", "/webhooks/payment")
        .header(
            "X-Webhook-Signature",
            "sha256=1234567890abcdef1234567890abcdef12345678",
        )
        .header("X-Webhook-ID", "wh_xyz789")
        .header("X-Webhook-Timestamp", "1642252800")
        .json(&json!({
            "event": "payment.completed",
            "data": {
                "transaction_id": "txn_abc123",
                "amount": 99.99,
                "currency": "USD",
                "customer": {"id": "cust_456", "email": "customer@example.com"}
            },
            "timestamp": 1642252800
        }))
}

fn deeply_nested_json() -> ScenarioRequest {
    ScenarioRequest::new("deeply nested JSON", "POST", "/api/complex-structure").json(&json!({
        "users": [
            {
                "id": 1,
                "profile": {
                    "name": "John",
                    "contacts": [
                        {"type": "email", "value": "john@example.com"},
                        {"type": "phone", "value": "+1234567890"}
                    ],
                    "address": {
                        "street": {"number": 123, "name": "Main St"},
                        "city": "San Francisco",
                        "coordinates": {"lat": 37.7749, "lng": -122.4194}
                    }
                },
                "permissions": {
                    "read": true,
                    "write": false,
                    "admin": false,
                    "roles": ["user", "viewer"]
                }
            }
        ],
        "metadata": {"version": "1.0", "timestamp": null, "count": 1}
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_bodies_carry_their_boundary() {
        for scenario in scenarios() {
            let Some((_, content_type)) = scenario
                .headers
                .iter()
                .find(|(n, _)| n == "Content-Type" && scenario.body.is_some())
            else {
                continue;
            };
            if let Some(boundary) = content_type.strip_prefix("multipart/form-data; boundary=") {
                let body = String::from_utf8(scenario.body.clone().unwrap()).unwrap();
                assert!(body.contains(&format!("--{boundary}\r\n")), "{}", scenario.label);
                assert!(body.ends_with(&format!("--{boundary}--\r\n")), "{}", scenario.label);
            }
        }
    }

    #[test]
    fn test_large_payload_holds_fifty_items() {
        let scenario = large_json_payload();
        let parsed: serde_json::Value =
            serde_json::from_slice(scenario.body.as_deref().unwrap()).unwrap();
        assert_eq!(parsed["items"].as_array().unwrap().len(), 50);
    }

    #[test]
    fn test_malformed_json_really_does_not_parse() {
        let scenario = scenarios()
            .into_iter()
            .find(|s| s.label == "malformed JSON")
            .unwrap();
        let parsed: Result<serde_json::Value, _> =
            serde_json::from_slice(scenario.body.as_deref().unwrap());
        assert!(parsed.is_err());
    }

    #[test]
    fn test_jsonrpc_and_graphql_shapes_present() {
        let all = scenarios();
        let rpc = all.iter().find(|s| s.label == "JSON-RPC 2.0 call").unwrap();
        let body: serde_json::Value = serde_json::from_slice(rpc.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["jsonrpc"], "2.0");

        let gql = all.iter().find(|s| s.label == "GraphQL query").unwrap();
        let body: serde_json::Value = serde_json::from_slice(gql.body.as_deref().unwrap()).unwrap();
        assert!(body["query"].as_str().unwrap().contains("GetUser"));
    }
}
