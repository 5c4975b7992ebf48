use std::collections::{BTreeMap, BTreeSet};

use gridzip_core::{Axis, ErrorInfo, Override, OverrideValue, SweepError};
use serde_json::Value;
use tracing::warn;

use crate::values::parse_values;

/// Builds one enumeration axis per distinct key from both axis sources.
///
/// Overrides come first, in slice order, followed by grid parameters in
/// mapping order. The upstream override parser guarantees overrides do not
/// repeat keys; that invariant is not re-validated here.
pub fn build_axes(
    overrides: &[Override],
    grid_params: &BTreeMap<String, Value>,
) -> Result<Vec<Axis>, SweepError> {
    let mut axes = Vec::with_capacity(overrides.len() + grid_params.len());
    for entry in overrides {
        let values = match &entry.value {
            OverrideValue::Single(value) => vec![format!("{}={}", entry.key, value)],
            OverrideValue::Choices(choices) => choices
                .iter()
                .map(|choice| format!("{}={}", entry.key, choice))
                .collect(),
        };
        axes.push(Axis::new(entry.key.clone(), values));
    }
    for (key, raw) in grid_params {
        let values = parse_values(key, raw)?
            .into_iter()
            .map(|value| format!("{key}={value}"))
            .collect();
        axes.push(Axis::new(key.clone(), values));
    }
    Ok(axes)
}

/// Zips list parameters into row aligned argument rows, one row per batch
/// index.
///
/// A list key that shadows an existing axis key is dropped with a warning;
/// the axis wins. The first surviving key fixes the expected row count and
/// any later key with a different parsed length aborts the sweep.
pub fn zip_rows(
    list_params: &BTreeMap<String, Value>,
    axes: &[Axis],
) -> Result<Vec<Vec<String>>, SweepError> {
    let axis_keys: BTreeSet<&str> = axes.iter().map(|axis| axis.key.as_str()).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut expected_len: Option<usize> = None;
    for (key, raw) in list_params {
        if axis_keys.contains(key.as_str()) {
            warn!("list key {key} is also a grid key; the list entry is ignored");
            continue;
        }
        let values = parse_values(key, raw)?;
        match expected_len {
            None => {
                expected_len = Some(values.len());
                rows = vec![Vec::new(); values.len()];
            }
            Some(expected) if values.len() != expected => {
                return Err(SweepError::List(
                    ErrorInfo::new("list-length", "list key length differs from other list keys")
                        .with_context("key", key)
                        .with_context("expected", expected.to_string())
                        .with_context("actual", values.len().to_string()),
                ));
            }
            Some(_) => {}
        }
        for (idx, value) in values.into_iter().enumerate() {
            rows[idx].push(format!("{key}={value}"));
        }
    }
    Ok(rows)
}
