//! Integration tests for the inspector

use toolbox_debug::backtrace::{self, Frame};
use toolbox_debug::{Inspector, InspectorConfig, SQL_PLACEHOLDER};
use toolbox_foundation::{Value, ValueMap};
use toolbox_host::{
    BrokenQuery, Collection, MemoryCollection, Model, ModelCollection, PRODUCT_MODEL, Record,
};

fn capture() -> Inspector<Vec<u8>> {
    Inspector::new(Vec::new())
}

fn text(inspector: Inspector<Vec<u8>>) -> String {
    String::from_utf8(inspector.into_inner()).unwrap()
}

fn products(n: i64) -> Vec<Model> {
    (1..=n)
        .map(|id| {
            Model::new(PRODUCT_MODEL)
                .with("entity_id", id)
                .with("status", 1)
        })
        .collect()
}

/// A record that does not describe itself.
struct Opaque;

impl Record for Opaque {
    fn type_name(&self) -> &str {
        "vendor/opaque"
    }

    fn to_value(&self) -> Value {
        Value::map([("raw", true)])
    }
}

// =============================================================================
// Subjects
// =============================================================================

#[test]
fn nested_value_dump() {
    let mut inner = ValueMap::new();
    inner.insert("qty".into(), Value::from(2));
    let value = Value::map([("items", Value::list([Value::Map(inner)]))]);

    let mut ins = capture();
    ins.inspect(&value, ()).unwrap();
    assert_eq!(
        text(ins),
        "<pre>map (\n    [items] =&gt; list (\n        [0] =&gt; map (\n            [qty] =&gt; 2\n        )\n    )\n)</pre>\n"
    );
}

#[test]
fn opaque_record_prints_raw_structure() {
    let mut ins = capture();
    let record: &dyn Record = &Opaque;
    ins.inspect(record, ()).unwrap();
    let out = text(ins);
    assert!(out.contains("vendor/opaque"));
    assert!(out.contains("[raw] =&gt; true"));
}

#[test]
fn collection_subject_through_inspect() {
    let mut ins = capture();
    let mut collection = MemoryCollection::new(PRODUCT_MODEL, products(4));
    let subject: &mut dyn Collection = &mut collection;
    ins.inspect(subject, ()).unwrap();
    assert!(text(ins).contains("<h2>Collection size: 4</h2>"));
}

#[test]
fn filtered_collection_shows_its_query() {
    let mut ins = capture();
    let mut collection = MemoryCollection::new(PRODUCT_MODEL, products(3));
    collection.add_filter("entity_id", &Value::from(2)).unwrap();

    assert_eq!(ins.inspect_collection(&mut collection, ()).unwrap(), 1);
    let out = text(ins);
    assert!(out.contains("<h2>Collection size: 1</h2>"));
    assert!(out.contains("`catalog_product`"));
    assert!(out.contains("WHERE"));
}

#[test]
fn console_collection_logs_heading_metadata_and_rows() {
    let mut ins = capture();
    let mut collection = MemoryCollection::new(PRODUCT_MODEL, products(2));
    ins.inspect_collection(&mut collection, "console").unwrap();

    let out = text(ins);
    assert_eq!(out.lines().count(), 6);
    assert!(out.lines().all(|l| l.starts_with("<script>console.log(")));
    assert!(out.contains(r#""size":2"#));
    assert!(out.contains("SELECT `main_table`.*"));
}

#[test]
fn broken_query_in_console_mode() {
    let mut ins = capture();
    ins.inspect_query(&BrokenQuery("missing select".into()), "console")
        .unwrap();
    assert_eq!(
        text(ins),
        format!("<script>console.log(\"{SQL_PLACEHOLDER}\");</script>\n")
    );
}

#[test]
fn custom_placeholder() {
    let config = InspectorConfig::default().with_placeholder("(no sql)");
    let mut ins = Inspector::with_config(Vec::new(), config);
    ins.print_sql(&BrokenQuery("x".into())).unwrap();
    assert_eq!(text(ins), "<pre>(no sql)</pre>\n");
}

// =============================================================================
// Backtraces
// =============================================================================

#[test]
fn captured_backtrace_renders() {
    let frames = backtrace::capture();
    let mut ins = capture();
    ins.print_backtrace(&frames).unwrap();
    let out = text(ins);
    assert!(out.starts_with("<table>\n"));
    assert!(out.ends_with("</table>\n"));
}

#[test]
fn caller_without_search_is_first_frame() {
    let frames = vec![Frame::new("a").at("a.rs", 1), Frame::new("b")];
    let mut ins = capture();
    let found = ins.print_caller(&frames, None).unwrap();
    assert_eq!(found, Some(frames[0].clone()));
}

#[test]
fn caller_not_found_prints_nothing() {
    let frames = vec![Frame::new("a").at("a.rs", 1)];
    let mut ins = capture();
    assert_eq!(ins.print_caller(&frames, Some("zzz")).unwrap(), None);
    assert!(text(ins).is_empty());
}
