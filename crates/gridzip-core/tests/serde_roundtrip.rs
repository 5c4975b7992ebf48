use gridzip_core::{Batch, Job, Override};

#[test]
fn override_round_trip_json() {
    let overrides = vec![
        Override::sweep("optimizer", vec!["sgd".into(), "adam".into()]),
        Override::fixed("epochs", "10"),
    ];
    let json = serde_json::to_string_pretty(&overrides).expect("serialize");
    let decoded: Vec<Override> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, overrides);
    assert!(decoded[0].is_sweep());
    assert!(!decoded[1].is_sweep());
}

#[test]
fn batch_round_trip_json() {
    let batch = Batch::new(vec![
        Job::new(vec!["optimizer=sgd".into(), "epochs=10".into()]),
        Job::new(vec!["optimizer=adam".into(), "epochs=10".into()]),
    ]);
    let json = serde_json::to_string(&batch).expect("serialize");
    let decoded: Batch = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, batch);
    assert_eq!(decoded.len(), 2);
}
