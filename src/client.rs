//! Catcher HTTP Client
//!
//! All outbound traffic to the catcher goes through [`CatcherClient`]: the
//! preflight reachability probe, bucket provisioning, and scenario delivery.
//! Provisioning is the only call where the status code is discriminated;
//! delivery is fire-and-forget.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::core::{BucketHandle, DeliveryOutcome, ScenarioRequest};
use crate::error::EmitError;

/// Default per-request timeout, matching the delivery timeout of the
/// reference catcher tooling.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The preflight probe answers fast or not at all.
pub const PREFLIGHT_TIMEOUT_SECS: u64 = 5;

pub struct CatcherClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatcherClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EmitError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmitError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One bounded GET against the bucket listing. 2xx within the timeout
    /// window or the run is off; a single attempt is definitive.
    pub async fn check_reachable(&self) -> Result<(), EmitError> {
        let url = format!("{}/api/buckets", self.base_url);

        match self
            .http
            .get(&url)
            .timeout(Duration::from_secs(PREFLIGHT_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                debug!(url = %url, "catcher is reachable");
                Ok(())
            }
            Ok(resp) => Err(EmitError::TargetUnreachable {
                url,
                reason: format!("status {}", resp.status()),
            }),
            Err(e) => Err(EmitError::TargetUnreachable {
                url,
                reason: e.to_string(),
            }),
        }
    }

    /// Create the bucket, folding 409 (already exists) into success so the
    /// same bucket name can be reused across runs. Any other non-2xx status
    /// or transport error is fatal.
    pub async fn create_bucket(&self, bucket: &BucketHandle) -> Result<(), EmitError> {
        let url = format!("{}/api/create/{}", self.base_url, bucket.name);
        let body = serde_json::json!({ "password": bucket.password });

        match self.http.post(&url).json(&body).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    debug!(bucket = %bucket.name, "bucket created");
                    Ok(())
                } else if status == reqwest::StatusCode::CONFLICT {
                    debug!(bucket = %bucket.name, "bucket already exists");
                    Ok(())
                } else {
                    Err(EmitError::BucketRejected {
                        name: bucket.name.clone(),
                        status: status.as_u16(),
                    })
                }
            }
            Err(e) => Err(EmitError::BucketRequestFailed {
                name: bucket.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Target URL for a scenario: base + bucket + raw descriptor path,
    /// joined by plain concatenation. The descriptor path is never
    /// re-encoded here.
    pub fn delivery_url(&self, bucket: &BucketHandle, scenario: &ScenarioRequest) -> String {
        format!("{}/{}{}", self.base_url, bucket.name, scenario.path)
    }

    /// Assemble the wire request for a scenario. `None` only when the
    /// method token or a header cannot be represented by the transport.
    pub fn build_request(
        &self,
        bucket: &BucketHandle,
        scenario: &ScenarioRequest,
    ) -> Option<reqwest::Request> {
        let url = self.delivery_url(bucket, scenario);
        let method = reqwest::Method::from_bytes(scenario.method.as_bytes()).ok()?;

        let mut headers = HeaderMap::new();
        for (name, value) in &scenario.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
            let value = HeaderValue::from_bytes(value.as_bytes()).ok()?;
            headers.append(name, value);
        }

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(body) = &scenario.body {
            builder = builder.body(body.clone());
        }
        builder.build().ok()
    }

    /// Send one scenario toward the bucket. Every outcome counts as an
    /// attempted emission; nothing here is retried or escalated.
    pub async fn deliver(
        &self,
        bucket: &BucketHandle,
        scenario: &ScenarioRequest,
    ) -> DeliveryOutcome {
        let Some(request) = self.build_request(bucket, scenario) else {
            warn!(label = scenario.label, "transport cannot represent request");
            return DeliveryOutcome::Unreachable;
        };

        match self.http.execute(request).await {
            Ok(resp) => DeliveryOutcome::Delivered(resp.status().as_u16()),
            Err(e) if e.is_connect() => {
                warn!(label = scenario.label, error = %e, "connection failed");
                DeliveryOutcome::Unreachable
            }
            Err(e) => {
                debug!(label = scenario.label, error = %e, "no readable response");
                DeliveryOutcome::ResponseUnreadable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatcherClient {
        CatcherClient::new("http://localhost:9090", Duration::from_secs(10)).unwrap()
    }

    fn bucket() -> BucketHandle {
        BucketHandle::new("demo", "secret123")
    }

    #[test]
    fn test_delivery_url_is_literal_concatenation() {
        let c = client();
        let b = bucket();

        let cases = [
            "/api/users?id=123&name=John&active=true",
            "/api/files/my%20document.pdf?version=2",
            "/api//users//123",
            "/api/../users/./123",
            "/api/users/",
            "/?query=test&action=search",
            "/",
        ];

        for path in cases {
            let scenario = ScenarioRequest::new("path case", "GET", path);
            assert_eq!(
                c.delivery_url(&b, &scenario),
                format!("http://localhost:9090/demo{path}")
            );
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let c = CatcherClient::new("http://localhost:9090/", Duration::from_secs(10)).unwrap();
        let scenario = ScenarioRequest::new("root", "GET", "/");
        assert_eq!(
            c.delivery_url(&bucket(), &scenario),
            "http://localhost:9090/demo/"
        );
    }

    #[test]
    fn test_build_request_distinguishes_empty_and_absent_bodies() {
        let c = client();
        let b = bucket();

        let absent = ScenarioRequest::new("absent", "POST", "/api/ping");
        let empty = ScenarioRequest::new("empty", "POST", "/api/empty").body(Vec::new());

        let absent_req = c.build_request(&b, &absent).unwrap();
        let empty_req = c.build_request(&b, &empty).unwrap();

        assert!(absent_req.body().is_none());
        assert!(empty_req.body().is_some());
    }

    #[test]
    fn test_build_request_accepts_nonstandard_method() {
        let c = client();
        let scenario = ScenarioRequest::new("custom", "CUSTOM", "/api/custom")
            .header("X-Custom-Method", "true");

        let request = c.build_request(&bucket(), &scenario).unwrap();
        assert_eq!(request.method().as_str(), "CUSTOM");
    }

    #[test]
    fn test_build_request_carries_all_headers() {
        let c = client();
        let scenario = ScenarioRequest::new("headers", "GET", "/api/forwarded")
            .header("X-Forwarded-For", "203.0.113.195, 70.41.3.18")
            .header("X-Forwarded-Proto", "https")
            .header("Forwarded", "for=192.0.2.60;proto=https;by=203.0.113.43");

        let request = c.build_request(&bucket(), &scenario).unwrap();
        assert_eq!(request.headers().len(), 3);
        assert_eq!(
            request.headers().get("x-forwarded-proto").unwrap(),
            "https"
        );
    }
}
