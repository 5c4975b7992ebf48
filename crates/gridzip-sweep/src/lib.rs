#![deny(missing_docs)]
#![doc = "Grid, list and ablative batch enumeration for parameter sweep runs."]

mod ablate;
mod axes;
mod canon;
mod join;
mod sweeper;
mod values;

pub use ablate::apply_overlays;
pub use axes::{build_axes, zip_rows};
pub use canon::{from_yaml_slice, stable_hash_string, to_canonical_json_bytes, to_yaml_string};
pub use join::join_batch;
pub use sweeper::{enumerate_batch, load_spec, sweep, SweepSpec};
pub use values::parse_values;
