//! Keyword tables driving word classification.

use crate::token::WordClass;

/// Words that start a clause.
const TOP_LEVEL: &[&str] = &[
    "ADD", "AFTER", "DELETE", "DROP", "EXCEPT", "FROM", "HAVING", "INSERT", "INTERSECT", "LIMIT",
    "SELECT", "SET", "UNION", "UPDATE", "VALUES", "WHERE",
];

/// Words that break the line inside a clause.
const NEWLINE: &[&str] = &["AND", "JOIN", "OR", "STRAIGHT_JOIN", "XOR"];

/// Built-in functions.
const FUNCTIONS: &[&str] = &[
    "ABS",
    "AVG",
    "CAST",
    "CEIL",
    "COALESCE",
    "CONCAT",
    "CONCAT_WS",
    "COUNT",
    "DATE_ADD",
    "DATE_FORMAT",
    "DATE_SUB",
    "FIND_IN_SET",
    "FLOOR",
    "GREATEST",
    "GROUP_CONCAT",
    "IF",
    "IFNULL",
    "LEAST",
    "LENGTH",
    "LOWER",
    "MAX",
    "MIN",
    "NOW",
    "NULLIF",
    "RAND",
    "ROUND",
    "SUBSTRING",
    "SUM",
    "TRIM",
    "UPPER",
];

/// Other reserved words.
const RESERVED: &[&str] = &[
    "ALL", "ALTER", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CREATE", "CROSS", "DEFAULT",
    "DESC", "DISTINCT", "DUPLICATE", "ELSE", "END", "EXISTS", "FALSE", "FOR", "FORCE", "IGNORE",
    "IN", "INDEX", "INNER", "INTERVAL", "INTO", "IS", "KEY", "LEFT", "LIKE", "NATURAL", "NOT",
    "NULL", "OFFSET", "ON", "OUTER", "PRIMARY", "REGEXP", "RIGHT", "RLIKE", "TABLE", "THEN",
    "TRUE", "USING", "WHEN",
];

/// Multi-word keywords, matched greedily by the lexer.
pub(crate) const COMPOUND: &[(&[&str], WordClass)] = &[
    (&["ALTER", "TABLE"], WordClass::TopLevel),
    (&["DELETE", "FROM"], WordClass::TopLevel),
    (&["GROUP", "BY"], WordClass::TopLevel),
    (&["INSERT", "INTO"], WordClass::TopLevel),
    (&["ON", "DUPLICATE", "KEY", "UPDATE"], WordClass::TopLevel),
    (&["ORDER", "BY"], WordClass::TopLevel),
    (&["UNION", "ALL"], WordClass::TopLevel),
    (&["CROSS", "JOIN"], WordClass::Newline),
    (&["INNER", "JOIN"], WordClass::Newline),
    (&["LEFT", "JOIN"], WordClass::Newline),
    (&["LEFT", "OUTER", "JOIN"], WordClass::Newline),
    (&["NATURAL", "JOIN"], WordClass::Newline),
    (&["RIGHT", "JOIN"], WordClass::Newline),
    (&["RIGHT", "OUTER", "JOIN"], WordClass::Newline),
];

/// Classifies a single upper-cased word.
#[must_use]
pub fn classify(upper: &str) -> WordClass {
    if TOP_LEVEL.contains(&upper) {
        WordClass::TopLevel
    } else if NEWLINE.contains(&upper) {
        WordClass::Newline
    } else if FUNCTIONS.contains(&upper) {
        WordClass::Function
    } else if RESERVED.contains(&upper) {
        WordClass::Reserved
    } else {
        WordClass::Identifier
    }
}
