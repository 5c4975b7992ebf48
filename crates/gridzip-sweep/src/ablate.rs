use gridzip_core::{AblativeOverlay, Batch};

use crate::values::render_value;

/// Expands the joined batch with one cloned variant per ablative overlay.
///
/// The result keeps the unmodified base batch as its prefix. For each
/// overlay every base job is cloned and each overlay pair either overwrites
/// the first assignment with a matching key prefix or appends a fresh
/// assignment at the end. Final size is `base × (1 + overlays)`.
pub fn apply_overlays(batch: Batch, overlays: &[AblativeOverlay]) -> Batch {
    if overlays.is_empty() {
        return batch;
    }
    let mut jobs = batch.jobs.clone();
    for overlay in overlays {
        for job in &batch.jobs {
            let mut variant = job.clone();
            for (key, value) in overlay {
                variant.assign(key, &render_value(value));
            }
            jobs.push(variant);
        }
    }
    Batch::new(jobs)
}
