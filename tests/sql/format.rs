//! Integration tests for SQL layout

use toolbox_sql::{FormatConfig, compress, format, format_with_config, split_statements};

// =============================================================================
// Layout
// =============================================================================

#[test]
fn clauses_start_lines() {
    let formatted = format("select sku, price from catalog where price > 10 or sku like 'A%' limit 5");
    assert_eq!(
        formatted,
        "SELECT\n    sku,\n    price\nFROM\n    catalog\nWHERE\n    price > 10\n    OR sku LIKE 'A%'\nLIMIT\n    5"
    );
}

#[test]
fn formatted_text_keeps_every_token() {
    let sql = "SELECT `main_table`.* FROM `catalog_product` AS `main_table` WHERE (`main_table`.`status` = 1) ORDER BY RAND() LIMIT 50";
    let formatted = format(sql);
    assert!(formatted.starts_with("SELECT\n"));
    assert!(formatted.contains("\nFROM\n"));
    assert!(formatted.contains("\nWHERE\n"));
    assert!(formatted.contains("\nORDER BY\n"));
    assert!(formatted.contains("\nLIMIT\n    50"));
    assert_eq!(compress(&formatted), compress(sql));
}

#[test]
fn strings_are_untouched() {
    let formatted = format("select 'from  where' from t");
    assert!(formatted.contains("'from  where'"));
}

#[test]
fn keyword_case_is_configurable() {
    let config = FormatConfig::default().with_uppercase_keywords(false);
    assert_eq!(
        format_with_config("select a from t", &config),
        "select\n    a\nfrom\n    t"
    );
}

#[test]
fn indent_is_configurable() {
    let config = FormatConfig::default().with_indent("\t");
    assert_eq!(
        format_with_config("select a from t", &config),
        "SELECT\n\ta\nFROM\n\tt"
    );
}

// =============================================================================
// Compression and splitting
// =============================================================================

#[test]
fn compress_is_single_line() {
    let compressed = compress("SELECT\n    a,\n    b\nFROM\n    t -- trailing");
    assert_eq!(compressed, "SELECT a, b FROM t");
}

#[test]
fn compress_undoes_format() {
    let sql = "SELECT a, b FROM t WHERE x = 1 AND y = 2";
    assert_eq!(compress(&format(sql)), sql);
}

#[test]
fn split_then_format_each() {
    let statements = split_statements("select 1; select 2");
    assert_eq!(statements, vec!["select 1", "select 2"]);
    let formatted: Vec<String> = statements.into_iter().map(format).collect();
    assert_eq!(formatted, vec!["SELECT\n    1", "SELECT\n    2"]);
}

#[test]
fn grouped_between_leaves_outer_and_on_its_own_line() {
    let formatted = format("select sku from t where (price between 1 and 9) and status = 1");
    assert!(formatted.ends_with("(price BETWEEN 1 AND 9)\n    AND status = 1"));
}
