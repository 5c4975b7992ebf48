use std::collections::BTreeMap;

use gridzip_core::{DryRunLauncher, Override};
use gridzip_sweep::{sweep, SweepSpec};
use serde_json::json;

fn main() {
    let grid_params: BTreeMap<_, _> = [
        ("model".to_string(), json!("resnet,vgg")),
        ("lr".to_string(), json!([0.1, 0.01])),
    ]
    .into_iter()
    .collect();
    let list_params: BTreeMap<_, _> = [
        ("data.shard".to_string(), json!([0, 1, 2])),
        ("data.seed".to_string(), json!([7, 8, 9])),
    ]
    .into_iter()
    .collect();
    let ablative_params = vec![[("lr".to_string(), json!(0.0))].into_iter().collect()];
    let spec = SweepSpec {
        list_params,
        grid_params,
        ablative_params,
    };
    let overrides = vec![
        Override::sweep("optimizer", vec!["sgd".into(), "adam".into()]),
        Override::fixed("epochs", "10"),
    ];

    let sweep_dir = std::env::temp_dir().join("gridzip-dry-run");
    let config = json!({
        "task": { "name": "demo" },
        "sweep": { "dir": sweep_dir.display().to_string() },
    });
    let returns = sweep(&spec, &overrides, &config, &sweep_dir, &DryRunLauncher).expect("sweep");
    println!("{}", serde_json::to_string_pretty(&returns[0]).expect("encode"));
}
