//! Structured text renderings of values.
//!
//! Two forms:
//! - [`plain`] - recursive key/value dump, no types
//! - [`typed`] - recursive dump with the type (and length) at every level

use std::fmt::Write;

use toolbox_foundation::{Value, ValueMap};

/// Indentation for one nesting level of the plain dump.
const PLAIN_INDENT: &str = "    ";

/// Indentation for one nesting level of the typed dump.
const TYPED_INDENT: &str = "  ";

// =============================================================================
// Plain Dump
// =============================================================================

/// Renders `value` as a recursive key/value dump.
///
/// ```
/// use toolbox_foundation::Value;
///
/// let value = Value::map([("sku", Value::from("ABC")), ("qty", Value::from(2))]);
/// assert_eq!(
///     toolbox_debug::dump::plain(&value),
///     "map (\n    [qty] => 2\n    [sku] => ABC\n)"
/// );
/// ```
#[must_use]
pub fn plain(value: &Value) -> String {
    let mut out = String::new();
    write_plain(&mut out, value, 0);
    out
}

fn write_plain(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::List(items) => {
            out.push_str("list (\n");
            for (i, item) in items.iter().enumerate() {
                plain_entry(out, &i.to_string(), item, depth);
            }
            close_plain(out, depth);
        }
        Value::Map(fields) => {
            out.push_str("map (\n");
            plain_fields(out, fields, depth);
            close_plain(out, depth);
        }
        Value::Object(object) => {
            let _ = writeln!(out, "{} (", object.class);
            plain_fields(out, &object.fields, depth);
            close_plain(out, depth);
        }
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}

fn plain_fields(out: &mut String, fields: &ValueMap, depth: usize) {
    for (key, item) in fields {
        plain_entry(out, key, item, depth);
    }
}

fn plain_entry(out: &mut String, key: &str, item: &Value, depth: usize) {
    indent(out, PLAIN_INDENT, depth + 1);
    let _ = write!(out, "[{key}] => ");
    write_plain(out, item, depth + 1);
    out.push('\n');
}

fn close_plain(out: &mut String, depth: usize) {
    indent(out, PLAIN_INDENT, depth);
    out.push(')');
}

// =============================================================================
// Typed Dump
// =============================================================================

/// Renders `value` with its type at every level.
///
/// ```
/// use toolbox_foundation::Value;
///
/// let value = Value::list(["a"]);
/// assert_eq!(
///     toolbox_debug::dump::typed(&value),
///     "list(1) {\n  [0]=>\n  string(1) \"a\"\n}"
/// );
/// ```
#[must_use]
pub fn typed(value: &Value) -> String {
    let mut out = String::new();
    write_typed(&mut out, value, 0);
    out
}

fn write_typed(out: &mut String, value: &Value, depth: usize) {
    let kind = value.kind().name();
    match value {
        Value::Nil => out.push_str(kind),
        Value::Bool(b) => {
            let _ = write!(out, "{kind}({b})");
        }
        Value::Int(n) => {
            let _ = write!(out, "{kind}({n})");
        }
        Value::Float(n) => {
            let _ = write!(out, "{kind}({n})");
        }
        Value::String(s) => {
            let _ = write!(out, "{kind}({}) \"{s}\"", s.len());
        }
        Value::List(items) => {
            let _ = writeln!(out, "{kind}({}) {{", items.len());
            for (i, item) in items.iter().enumerate() {
                typed_entry(out, &i.to_string(), item, depth);
            }
            close_typed(out, depth);
        }
        Value::Map(fields) => {
            let _ = writeln!(out, "{kind}({}) {{", fields.len());
            typed_fields(out, fields, depth);
            close_typed(out, depth);
        }
        Value::Object(object) => {
            let _ = writeln!(
                out,
                "{kind}({}) ({}) {{",
                object.class,
                object.fields.len()
            );
            typed_fields(out, &object.fields, depth);
            close_typed(out, depth);
        }
    }
}

fn typed_fields(out: &mut String, fields: &ValueMap, depth: usize) {
    for (key, item) in fields {
        typed_entry(out, &format!("\"{key}\""), item, depth);
    }
}

fn typed_entry(out: &mut String, key: &str, item: &Value, depth: usize) {
    indent(out, TYPED_INDENT, depth + 1);
    let _ = writeln!(out, "[{key}]=>");
    indent(out, TYPED_INDENT, depth + 1);
    write_typed(out, item, depth + 1);
    out.push('\n');
}

fn close_typed(out: &mut String, depth: usize) {
    indent(out, TYPED_INDENT, depth);
    out.push('}');
}

fn indent(out: &mut String, unit: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(unit);
    }
}
