//! Run Orchestration
//!
//! Drives one emission run through its phases:
//!
//! ```text
//! Idle → CheckingTarget → ProvisioningBucket → EmittingScenarios → Reporting → Done
//!              │                  │
//!              └──► Aborted ◄─────┘
//! ```
//!
//! Scenarios are emitted strictly sequentially on a single logical task,
//! with each entry's pacing delay applied after emission. Preflight and
//! provisioning failures abort the run before any scenario traffic is sent;
//! delivery outcomes never do.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::client::CatcherClient;
use crate::core::{BucketHandle, DeliveryOutcome, RunSummary, ScenarioRequest};
use crate::error::EmitError;

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    CheckingTarget,
    ProvisioningBucket,
    EmittingScenarios,
    Reporting,
    Done,
    Aborted,
}

pub struct EmitterEngine {
    client: CatcherClient,
    bucket: BucketHandle,
    phase: RunPhase,
    pace_override: Option<Duration>,
}

impl EmitterEngine {
    pub fn new(client: CatcherClient, bucket: BucketHandle) -> Self {
        Self {
            client,
            bucket,
            phase: RunPhase::Idle,
            pace_override: None,
        }
    }

    /// Replace every catalog entry's pacing with a fixed delay. Zero is
    /// valid: pacing only exists so a human can watch the bucket fill live.
    pub fn with_pace_override(mut self, pace: Duration) -> Self {
        self.pace_override = Some(pace);
        self
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn bucket(&self) -> &BucketHandle {
        &self.bucket
    }

    pub fn viewer_url(&self) -> String {
        self.bucket.viewer_url(self.client.base_url())
    }

    /// Run the full sequence: preflight, provisioning, then one delivery
    /// per catalog entry. The emitted counter is local to the run and comes
    /// back in the summary; there is no ambient shared state.
    pub async fn run(&mut self, catalog: &[ScenarioRequest]) -> Result<RunSummary, EmitError> {
        let started = Instant::now();

        self.phase = RunPhase::CheckingTarget;
        if let Err(e) = self.client.check_reachable().await {
            self.phase = RunPhase::Aborted;
            return Err(e);
        }
        info!(url = self.client.base_url(), "catcher is up");

        self.phase = RunPhase::ProvisioningBucket;
        if let Err(e) = self.client.create_bucket(&self.bucket).await {
            self.phase = RunPhase::Aborted;
            return Err(e);
        }
        info!(bucket = %self.bucket.name, "bucket ready");

        self.phase = RunPhase::EmittingScenarios;
        let mut summary = RunSummary::default();
        let mut emitted: u64 = 0;

        for scenario in catalog {
            let outcome = self.client.deliver(&self.bucket, scenario).await;
            emitted += 1;

            match outcome {
                DeliveryOutcome::Delivered(status) => {
                    summary.delivered += 1;
                    info!(
                        seq = emitted,
                        method = scenario.method,
                        status,
                        label = scenario.label,
                        "emitted"
                    );
                }
                DeliveryOutcome::ResponseUnreadable => {
                    summary.unreadable += 1;
                    info!(
                        seq = emitted,
                        method = scenario.method,
                        label = scenario.label,
                        "emitted, response not readable"
                    );
                }
                DeliveryOutcome::Unreachable => {
                    summary.unreachable += 1;
                    warn!(
                        seq = emitted,
                        method = scenario.method,
                        label = scenario.label,
                        "emitted, connection failed"
                    );
                }
            }

            let pause = self.pace_override.unwrap_or_else(|| scenario.pause());
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }

        self.phase = RunPhase::Reporting;
        summary.emitted = emitted;
        summary.elapsed = started.elapsed();
        summary.viewer_url = self.viewer_url();

        self.phase = RunPhase::Done;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_engine() -> EmitterEngine {
        // port 1 on loopback: connection refused immediately
        let client = CatcherClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        EmitterEngine::new(client, BucketHandle::new("demo", "secret123"))
    }

    #[test]
    fn test_engine_starts_idle() {
        assert_eq!(unreachable_engine().phase(), RunPhase::Idle);
    }

    #[tokio::test]
    async fn test_unreachable_target_aborts_before_any_emission() {
        let mut engine = unreachable_engine();
        let catalog = vec![ScenarioRequest::new("ping", "GET", "/api/ping")];

        let result = engine.run(&catalog).await;

        assert!(matches!(result, Err(EmitError::TargetUnreachable { .. })));
        assert_eq!(engine.phase(), RunPhase::Aborted);
    }

    #[test]
    fn test_viewer_url_uses_engine_bucket() {
        let client = CatcherClient::new("http://localhost:9090", Duration::from_secs(1)).unwrap();
        let engine = EmitterEngine::new(client, BucketHandle::new("demo", "secret123"));
        assert_eq!(
            engine.viewer_url(),
            "http://localhost:9090/ui/bucket.html?name=demo&password=secret123"
        );
    }
}
