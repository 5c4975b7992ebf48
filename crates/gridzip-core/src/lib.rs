#![deny(missing_docs)]
#![doc = "Core types, errors and collaborator seams for the gridzip sweep engine."]

use serde_json::{json, Value};

pub mod errors;
mod types;

pub use errors::{ErrorInfo, SweepError};
pub use types::{AblativeOverlay, Axis, Batch, Job, Override, OverrideValue};

/// Contract for launcher collaborators executing a finished batch.
///
/// The engine hands over ownership of the batch together with the index of
/// its first job and waits for a single opaque result. Parallelism, retries
/// and result collection are entirely the launcher's responsibility.
pub trait Launcher: Send + Sync {
    /// Launches every job in the batch, numbering jobs sequentially from
    /// `initial_job_idx`.
    fn launch(&self, batch: Batch, initial_job_idx: usize) -> Result<Value, SweepError>;
}

/// Launcher that executes nothing and reports the batch it was handed.
///
/// Stands in for the real launcher collaborator in demos and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunLauncher;

impl Launcher for DryRunLauncher {
    fn launch(&self, batch: Batch, initial_job_idx: usize) -> Result<Value, SweepError> {
        let jobs = serde_json::to_value(&batch.jobs)
            .map_err(|err| SweepError::Serde(ErrorInfo::new("dry-run-encode", err.to_string())))?;
        Ok(json!({
            "launched": batch.len(),
            "initial_job_idx": initial_job_idx,
            "jobs": jobs,
        }))
    }
}
