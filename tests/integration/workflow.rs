//! End-to-end debugging sessions against an in-memory host

use toolbox::debug::{Inspector, InspectorConfig, ManualClock, Timer, registry_snapshot};
use toolbox::foundation::Value;
use toolbox::host::{
    MemoryModels, MemoryRegistry, Model, ModelLoader, ORDER_MODEL, PRODUCT_MODEL, Record, Registry,
    get_product, random_collection,
};

fn shop() -> MemoryModels {
    let mut models = MemoryModels::new().with_seed(42);
    for id in 1..=80_i64 {
        models.insert(
            Model::new(PRODUCT_MODEL)
                .with("entity_id", id)
                .with("sku", format!("SKU-{id:03}"))
                .with("visibility", id % 4),
        );
    }
    models.insert(
        Model::new(ORDER_MODEL)
            .with("entity_id", 1)
            .with("increment_id", "100000001"),
    );
    models
}

#[test]
fn inspect_a_product_then_its_catalog() {
    let models = shop();
    let mut ins = Inspector::new(Vec::new());

    let product = get_product(&models, "SKU-007", Some("sku")).unwrap().unwrap();
    ins.inspect_record(product.as_ref(), ()).unwrap();

    let mut catalog = models.collection(PRODUCT_MODEL).unwrap();
    let printed = ins.inspect_collection(catalog.as_mut(), ()).unwrap();
    assert_eq!(printed, 50);

    let out = String::from_utf8(ins.into_inner()).unwrap();
    assert!(out.contains("[sku] =&gt; SKU-007"));
    assert!(out.contains("<h2>Collection size: 80</h2>"));
    assert!(out.contains("FROM\n    `catalog_product` AS `main_table`"));
}

#[test]
fn time_a_sampling_pass() {
    let models = shop();
    let clock = ManualClock::new();
    let mut registry = MemoryRegistry::new();
    let mut timer = Timer::with_clock(&mut registry, clock.clone());

    timer.start("sample", 1).unwrap();
    let sample = random_collection(
        &models,
        PRODUCT_MODEL,
        5,
        &[("visibility", Value::map([("gteq", 2)]))],
    )
    .unwrap();
    clock.advance(0.125);
    let midway = timer.mid("sample", 1).unwrap();
    let total = timer.stop("sample", 1).unwrap();

    assert_eq!(sample.len(), 5);
    for record in &sample {
        let visibility = record.to_value().get("visibility").and_then(Value::as_int);
        assert!(visibility.is_some_and(|v| v >= 2));
    }
    assert_eq!(midway, total);
    assert!(registry.is_empty());
}

#[test]
fn dump_the_registry_mid_request() {
    let mut registry = MemoryRegistry::new();
    registry.set("_resource/connection", Value::from("pool"));
    let mut timer = Timer::with_clock(&mut registry, ManualClock::at(10.0));
    timer.start("request", 1).unwrap();

    let mut ins = Inspector::with_config(Vec::new(), InspectorConfig::raw_sql());
    let entries = ins.dump_registry(&registry, true).unwrap();

    assert_eq!(entries, registry_snapshot(&registry));
    let out = String::from_utf8(ins.into_inner()).unwrap();
    assert_eq!(
        out,
        "<pre>[_resource/connection] =&gt; [alot]\n[request1] =&gt; 10\n</pre>\n"
    );
}
