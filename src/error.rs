//! Fatal Error Classes
//!
//! Only two things abort a run: an unreachable target during preflight and
//! a bucket the catcher refuses to provision. Scenario delivery never
//! produces an error; its tolerated outcomes are enumerated in
//! [`crate::core::DeliveryOutcome`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("catcher is not reachable at {url}: {reason}")]
    TargetUnreachable { url: String, reason: String },

    #[error("bucket '{name}' was rejected by the catcher (status {status})")]
    BucketRejected { name: String, status: u16 },

    #[error("bucket '{name}' could not be provisioned: {reason}")]
    BucketRequestFailed { name: String, reason: String },

    #[error("invalid emitter configuration: {0}")]
    Config(String),
}
