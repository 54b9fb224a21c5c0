//! Integration tests for Value types
//!
//! Tests construction, lookup, truthiness, display and serialization.

use std::sync::Arc;

use toolbox_foundation::{ObjectValue, Value, ValueKind, ValueMap};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_scalars_report_kind() {
    assert_eq!(Value::Nil.kind(), ValueKind::Nil);
    assert_eq!(Value::from(true).kind(), ValueKind::Bool);
    assert_eq!(Value::from(3).kind(), ValueKind::Int);
    assert_eq!(Value::from(0.5).kind(), ValueKind::Float);
    assert_eq!(Value::from("x").kind(), ValueKind::String);
}

#[test]
fn value_composites_report_kind() {
    assert_eq!(Value::list([1, 2]).kind(), ValueKind::List);
    assert_eq!(Value::map([("a", 1)]).kind(), ValueKind::Map);
    assert_eq!(
        Value::object("sales/order", ValueMap::new()).kind(),
        ValueKind::Object
    );
}

#[test]
fn value_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::from(false).is_truthy());
    assert!(Value::from(0).is_truthy());
    assert!(Value::from("").is_truthy());
}

#[test]
fn value_from_option() {
    assert_eq!(Value::from(None::<i64>), Value::Nil);
    assert_eq!(Value::from(Some("sku")), Value::from("sku"));
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn map_and_object_lookup() {
    let map = Value::map([("sku", "A1")]);
    assert_eq!(map.get("sku").and_then(Value::as_str), Some("A1"));
    assert_eq!(map.get("missing"), None);

    let mut fields = ValueMap::new();
    fields.insert(Arc::from("entity_id"), Value::from(9));
    let object = Value::from(ObjectValue::new("catalog/product", fields));
    assert_eq!(object.get("entity_id").and_then(Value::as_int), Some(9));
    assert_eq!(object.as_object().map(|o| o.class.as_ref()), Some("catalog/product"));
}

#[test]
fn lengths() {
    assert_eq!(Value::list([1, 2, 3]).len(), Some(3));
    assert_eq!(Value::map([("a", 1)]).len(), Some(1));
    assert_eq!(Value::from("abc").len(), None);
    assert_eq!(Value::from(1).len(), None);
    assert!(Value::list(Vec::<Value>::new()).is_empty());
}

// =============================================================================
// Display and Serialization
// =============================================================================

#[test]
fn display_is_compact() {
    let value = Value::map([("a", Value::list([1, 2])), ("b", Value::Nil)]);
    assert_eq!(value.to_string(), "{a: [1, 2], b: nil}");
}

#[test]
fn clones_share_structure() {
    let value = Value::list((0..1000).collect::<Vec<i64>>());
    let copy = value.clone();
    assert_eq!(value, copy);
}

#[test]
fn serializes_for_console_output() {
    let value = Value::map([("k", 1)]);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"k":1}"#);
}
