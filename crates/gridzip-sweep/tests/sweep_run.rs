use std::collections::BTreeMap;

use gridzip_core::{Batch, DryRunLauncher, Launcher, Override, SweepError};
use gridzip_sweep::{enumerate_batch, load_spec, sweep, to_canonical_json_bytes, SweepSpec};
use serde_json::{json, Value};

struct NeverLauncher;

impl Launcher for NeverLauncher {
    fn launch(&self, _batch: Batch, _initial_job_idx: usize) -> Result<Value, SweepError> {
        unreachable!("launcher must not run after a fatal precondition failure");
    }
}

fn sample_spec() -> SweepSpec {
    SweepSpec {
        grid_params: [("optimizer".to_string(), json!("sgd,adam"))].into_iter().collect(),
        list_params: BTreeMap::new(),
        ablative_params: Vec::new(),
    }
}

#[test]
fn sweep_writes_the_manifest_and_wraps_the_launcher_result() {
    let temp = tempfile::tempdir().expect("tmp dir");
    let sweep_dir = temp.path().join("multirun").join("2024-01-01");
    let config = json!({
        "task": { "name": "demo", "epochs": 10 },
        "sweep": { "dir": sweep_dir.display().to_string() },
    });
    let overrides = vec![Override::fixed("epochs", "10")];

    let returns = sweep(&sample_spec(), &overrides, &config, &sweep_dir, &DryRunLauncher)
        .expect("sweep");
    assert_eq!(returns.len(), 1);
    assert_eq!(returns[0]["launched"], json!(2));
    assert_eq!(returns[0]["initial_job_idx"], json!(0));

    let manifest = std::fs::read_to_string(sweep_dir.join("multirun.yaml")).expect("manifest");
    let restored: Value = serde_yaml::from_str(&manifest).expect("manifest parses");
    assert_eq!(restored, config);
}

#[test]
fn sweep_dir_failure_aborts_before_any_launch() {
    let temp = tempfile::tempdir().expect("tmp dir");
    let blocker = temp.path().join("occupied");
    std::fs::write(&blocker, b"not a directory").expect("blocker file");

    let err = sweep(&sample_spec(), &[], &json!({}), &blocker, &NeverLauncher)
        .expect_err("must fail");
    match err {
        SweepError::Io(info) => assert_eq!(info.code, "sweep-dir"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn enumeration_repeats_byte_for_byte() {
    let spec = SweepSpec {
        grid_params: [("a".to_string(), json!([1, 2])), ("b".to_string(), json!([3, 4]))]
            .into_iter()
            .collect(),
        list_params: [("seed".to_string(), json!([1, 2]))].into_iter().collect(),
        ablative_params: vec![[("a".to_string(), json!(0))].into_iter().collect()],
    };
    let overrides = vec![Override::sweep("model", vec!["cnn".into(), "mlp".into()])];

    let batch_a = enumerate_batch(&spec, &overrides).expect("enumerate");
    let batch_b = enumerate_batch(&spec, &overrides).expect("enumerate");
    assert_eq!(batch_a, batch_b);
    let bytes_a = to_canonical_json_bytes(&batch_a).expect("json");
    let bytes_b = to_canonical_json_bytes(&batch_b).expect("json");
    assert_eq!(bytes_a, bytes_b);
    assert_eq!(batch_a.len(), 2 * 2 * 2 * 2 * 2);
}

#[test]
fn spec_loads_from_yaml_with_absent_sections_empty() {
    let temp = tempfile::tempdir().expect("tmp dir");
    let spec_path = temp.path().join("sweep.yaml");
    std::fs::write(
        &spec_path,
        concat!(
            "grid_params:\n",
            "  model: resnet,vgg\n",
            "list_params:\n",
            "  lr: [0.1, 0.01]\n",
            "  seed: [1, 2]\n",
        ),
    )
    .expect("write spec");

    let spec = load_spec(&spec_path).expect("load");
    assert_eq!(spec.grid_params.get("model"), Some(&json!("resnet,vgg")));
    assert_eq!(spec.list_params.len(), 2);
    assert!(spec.ablative_params.is_empty());

    let batch = enumerate_batch(&spec, &[]).expect("enumerate");
    assert_eq!(batch.len(), 4);
}

#[test]
fn missing_spec_file_is_an_io_error() {
    let temp = tempfile::tempdir().expect("tmp dir");
    let err = load_spec(temp.path().join("absent.yaml")).expect_err("must fail");
    match err {
        SweepError::Io(info) => assert_eq!(info.code, "spec-read"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn spec_hash_is_stable_across_invocations() {
    let spec = sample_spec();
    let overrides = vec![Override::fixed("epochs", "10")];
    let hash_a = spec.spec_hash(&overrides).expect("hash");
    let hash_b = spec.spec_hash(&overrides).expect("hash");
    assert_eq!(hash_a, hash_b);
    assert_eq!(hash_a.len(), 64);
}
