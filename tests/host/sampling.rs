//! Integration tests for random sampling over collections

use toolbox_foundation::{ErrorKind, Value};
use toolbox_host::{MemoryModels, Model, PRODUCT_MODEL, Record, random_collection, random_model};

fn catalog(n: i64) -> MemoryModels {
    (1..=n).fold(MemoryModels::new().with_seed(7), |models, id| {
        models.with_model(
            Model::new(PRODUCT_MODEL)
                .with("entity_id", id)
                .with("status", if id % 2 == 0 { 1 } else { 2 }),
        )
    })
}

#[test]
fn sample_has_requested_size() {
    let models = catalog(20);
    let sample = random_collection(&models, PRODUCT_MODEL, 5, &[]).unwrap();
    assert_eq!(sample.len(), 5);
}

#[test]
fn sample_respects_filters() {
    let models = catalog(20);
    let sample =
        random_collection(&models, PRODUCT_MODEL, 50, &[("status", Value::from(1))]).unwrap();
    assert_eq!(sample.len(), 10);
    for record in &sample {
        assert_eq!(record.to_value().get("status"), Some(&Value::Int(1)));
    }
}

#[test]
fn sample_is_deterministic_per_seed() {
    let ids = |models: &MemoryModels| -> Vec<Value> {
        random_collection(models, PRODUCT_MODEL, 5, &[])
            .unwrap()
            .iter()
            .filter_map(|r| r.to_value().get("entity_id").cloned())
            .collect()
    };
    assert_eq!(ids(&catalog(30)), ids(&catalog(30)));
}

#[test]
fn rejected_filter_aborts_sampling() {
    let models = catalog(5);
    let err = random_collection(&models, PRODUCT_MODEL, 3, &[("colour", Value::from("red"))])
        .err().unwrap();
    assert!(
        matches!(err.kind, ErrorKind::FilterApplication { ref attribute, .. } if attribute == "colour")
    );
}

#[test]
fn single_model_on_empty_match() {
    let models = catalog(5);
    let found = random_model(&models, PRODUCT_MODEL, &[("status", Value::from(9))]).unwrap();
    assert!(found.is_none());
}
