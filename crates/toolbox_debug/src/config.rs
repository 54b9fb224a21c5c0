//! Configuration for the inspector.

use toolbox_sql::FormatConfig;

/// Elements processed per collection unless configured otherwise.
pub const DEFAULT_COLLECTION_LIMIT: usize = 50;

/// Printed in place of a query that failed to render.
pub const SQL_PLACEHOLDER: &str = "A problem has been encountered printing the SQL!";

/// Configuration for an [`Inspector`](crate::Inspector).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectorConfig {
    /// Maximum number of collection elements materialized and inspected.
    pub collection_limit: usize,

    /// Text substituted for a query that fails to render.
    pub placeholder: String,

    /// Pretty-print SQL outside console mode.
    pub format_sql: bool,

    /// Layout used when pretty-printing SQL.
    pub format: FormatConfig,

    /// Prefix stripped from file paths in backtrace tables.
    pub strip_prefix: Option<String>,

    /// Files under this prefix are skipped when searching for a caller.
    pub ignore_prefix: Option<String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            collection_limit: DEFAULT_COLLECTION_LIMIT,
            placeholder: SQL_PLACEHOLDER.to_string(),
            format_sql: true,
            format: FormatConfig::default(),
            strip_prefix: None,
            ignore_prefix: None,
        }
    }
}

impl InspectorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that prints SQL exactly as rendered.
    #[must_use]
    pub fn raw_sql() -> Self {
        Self {
            format_sql: false,
            ..Self::default()
        }
    }

    /// Creates a configuration for a source checkout rooted at `root`.
    ///
    /// Backtrace paths are shown relative to `root`, and `templates` under it
    /// are skipped when searching for a caller.
    #[must_use]
    pub fn for_project(root: &str, templates: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            strip_prefix: Some(format!("{root}/")),
            ignore_prefix: Some(format!("{root}/{}", templates.trim_start_matches('/'))),
            ..Self::default()
        }
    }

    /// Builder method to set the collection limit.
    #[must_use]
    pub fn with_collection_limit(mut self, limit: usize) -> Self {
        self.collection_limit = limit;
        self
    }

    /// Builder method to set the query placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Builder method to enable or disable SQL pretty-printing.
    #[must_use]
    pub fn with_format_sql(mut self, format_sql: bool) -> Self {
        self.format_sql = format_sql;
        self
    }

    /// Builder method to set the SQL layout.
    #[must_use]
    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    /// Builder method to set the backtrace path prefix.
    #[must_use]
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }

    /// Builder method to set the ignored caller prefix.
    #[must_use]
    pub fn with_ignore_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ignore_prefix = Some(prefix.into());
        self
    }
}
