use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use gridzip_core::{AblativeOverlay, Batch, ErrorInfo, Launcher, Override, SweepError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::ablate::apply_overlays;
use crate::axes::{build_axes, zip_rows};
use crate::canon::{from_yaml_slice, stable_hash_string, to_yaml_string};
use crate::join::join_batch;

/// Name of the run manifest written into the sweep directory.
const MANIFEST_FILE: &str = "multirun.yaml";

fn io_error(code: &str, err: impl ToString, path: &Path) -> SweepError {
    SweepError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Sweep parameter specification supplied by the external configuration
/// system. Absent sections are equivalent to empty ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SweepSpec {
    /// Zipped parameters, one row of values per batch index.
    #[serde(default)]
    pub list_params: BTreeMap<String, Value>,
    /// Cross multiplied parameters, one axis per key.
    #[serde(default)]
    pub grid_params: BTreeMap<String, Value>,
    /// Ablative overlays applied to cloned copies of the joined batch.
    #[serde(default)]
    pub ablative_params: Vec<AblativeOverlay>,
}

impl SweepSpec {
    /// Returns the deterministic hash of the spec and its overrides.
    pub fn spec_hash(&self, overrides: &[Override]) -> Result<String, SweepError> {
        stable_hash_string(&(self, overrides))
    }
}

/// Loads a sweep spec from YAML on disk.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<SweepSpec, SweepError> {
    let spec_path = path.as_ref();
    let bytes = fs::read(spec_path).map_err(|err| io_error("spec-read", err, spec_path))?;
    from_yaml_slice(&bytes)
}

/// Enumerates the complete ordered batch for the given spec and overrides.
///
/// Pure and synchronous: axes and rows are built first, joined into the
/// base batch, then expanded once per ablative overlay. Every fatal
/// condition fires here, before any job can reach a launcher.
pub fn enumerate_batch(spec: &SweepSpec, overrides: &[Override]) -> Result<Batch, SweepError> {
    let axes = build_axes(overrides, &spec.grid_params)?;
    let rows = zip_rows(&spec.list_params, &axes)?;
    let joined = join_batch(&axes, &rows);
    Ok(apply_overlays(joined, &spec.ablative_params))
}

/// Runs a full sweep invocation.
///
/// Persists the resolved configuration tree to `multirun.yaml` inside the
/// sweep directory (created recursively), enumerates the batch, hands it to
/// the launcher numbered from job zero and wraps the launcher's single
/// result in a one element sequence. The manifest write happens before
/// enumeration and is not retried.
pub fn sweep(
    spec: &SweepSpec,
    overrides: &[Override],
    config: &Value,
    sweep_dir: &Path,
    launcher: &dyn Launcher,
) -> Result<Vec<Value>, SweepError> {
    fs::create_dir_all(sweep_dir).map_err(|err| io_error("sweep-dir", err, sweep_dir))?;
    let manifest_path = sweep_dir.join(MANIFEST_FILE);
    let manifest = to_yaml_string(config)?;
    fs::write(&manifest_path, manifest).map_err(|err| io_error("manifest-write", err, &manifest_path))?;
    info!("sweep output dir: {}", sweep_dir.display());

    let spec_hash = spec.spec_hash(overrides)?;
    let batch = enumerate_batch(spec, overrides)?;
    info!("enumerated {} jobs for sweep {spec_hash}", batch.len());

    let initial_job_idx = 0;
    let returns = launcher.launch(batch, initial_job_idx)?;
    Ok(vec![returns])
}
