//! The inspector: readable output for values, records, collections and queries.
//!
//! Output goes to any [`io::Write`]. Markup mode wraps each item in simple
//! HTML (a heading per type name, `<pre>` per dump). Console mode writes one
//! `<script>console.log(...)</script>` line per item, with the item serialized
//! to JSON.
//!
//! Query rendering failures never escape an inspection: the configured
//! placeholder is printed in their place. Writer and serialization failures
//! are returned.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{self, Write};

use toolbox_foundation::{Error, Result, Value};
use toolbox_host::{Collection, QueryRenderable, Record, Registry};

use crate::backtrace::{Frame, find_frame, render_table};
use crate::config::InspectorConfig;
use crate::dump;
use crate::options::DisplayOptions;

// =============================================================================
// Subjects
// =============================================================================

/// Anything the inspector can print.
pub enum Subject<'a> {
    /// A plain value.
    Value(&'a Value),
    /// A domain object.
    Record(&'a dyn Record),
    /// A lazily loaded result set. Loading it pages it.
    Collection(&'a mut dyn Collection),
    /// A query source.
    Query(&'a dyn QueryRenderable),
}

impl<'a> From<&'a Value> for Subject<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a dyn Record> for Subject<'a> {
    fn from(record: &'a dyn Record) -> Self {
        Self::Record(record)
    }
}

impl<'a> From<&'a mut dyn Collection> for Subject<'a> {
    fn from(collection: &'a mut dyn Collection) -> Self {
        Self::Collection(collection)
    }
}

impl<'a> From<&'a dyn QueryRenderable> for Subject<'a> {
    fn from(query: &'a dyn QueryRenderable) -> Self {
        Self::Query(query)
    }
}

// =============================================================================
// Inspector
// =============================================================================

/// Prints subjects to a writer.
pub struct Inspector<W: Write = io::Stdout> {
    out: W,
    config: InspectorConfig,
}

impl Inspector<io::Stdout> {
    /// Creates an inspector printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Inspector<W> {
    /// Creates an inspector with the default configuration.
    pub fn new(out: W) -> Self {
        Self::with_config(out, InspectorConfig::default())
    }

    /// Creates an inspector with the given configuration.
    pub fn with_config(out: W, config: InspectorConfig) -> Self {
        Self { out, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the inspector, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints `subject`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or, in console mode, if a value
    /// cannot be serialized.
    pub fn inspect<'a>(
        &mut self,
        subject: impl Into<Subject<'a>>,
        options: impl Into<DisplayOptions>,
    ) -> Result<()> {
        let options = options.into();
        match subject.into() {
            Subject::Value(value) => self.inspect_value(value, &options),
            Subject::Record(record) => self.inspect_record(record, &options),
            Subject::Collection(collection) => {
                self.inspect_collection(collection, &options).map(|_| ())
            }
            Subject::Query(query) => self.inspect_query(query, &options),
        }
    }

    /// Prints a plain value.
    ///
    /// # Errors
    ///
    /// See [`inspect`](Self::inspect).
    pub fn inspect_value(&mut self, value: &Value, options: impl Into<DisplayOptions>) -> Result<()> {
        self.body(value, &options.into())
    }

    /// Prints the record's type name, then its description if it is
    /// self-describing, else its raw structure.
    ///
    /// # Errors
    ///
    /// See [`inspect`](Self::inspect).
    pub fn inspect_record<R>(&mut self, record: &R, options: impl Into<DisplayOptions>) -> Result<()>
    where
        R: Record + ?Sized,
    {
        let options = options.into();
        self.heading(record.type_name(), &options)?;
        let value = match record.as_self_describing() {
            Some(described) => described.describe(),
            None => record.to_value(),
        };
        self.body(&value, &options)
    }

    /// Prints a collection heading, its metadata, then each element.
    ///
    /// A collection larger than the configured limit is paged down to the
    /// limit before loading, and no more than the limit is printed even if the
    /// collection ignores its page size. Returns the number of elements
    /// printed.
    ///
    /// # Errors
    ///
    /// See [`inspect`](Self::inspect).
    pub fn inspect_collection<C>(
        &mut self,
        collection: &mut C,
        options: impl Into<DisplayOptions>,
    ) -> Result<usize>
    where
        C: Collection + ?Sized,
    {
        let options = options.into();
        let limit = self.config.collection_limit;

        self.heading(collection.type_name(), &options)?;
        let size = collection.size();
        let sql = collection
            .query()
            .map(|query| self.sql_or_placeholder(query, &options));

        if size > limit {
            collection.set_page_size(limit);
        }
        self.metadata(size, sql, &options)?;

        let records = collection.load();
        let mut printed = 0;
        for record in records.iter().take(limit) {
            self.inspect_record(record.as_ref(), &options)?;
            printed += 1;
        }
        Ok(printed)
    }

    /// Prints the rendered query, or the placeholder if rendering fails.
    ///
    /// # Errors
    ///
    /// See [`inspect`](Self::inspect).
    pub fn inspect_query<Q>(&mut self, source: &Q, options: impl Into<DisplayOptions>) -> Result<()>
    where
        Q: QueryRenderable + ?Sized,
    {
        let options = options.into();
        let sql = self.sql_or_placeholder(source, &options);
        self.body(&Value::from(sql), &options)
    }

    /// Pretty-prints a query with default options.
    ///
    /// # Errors
    ///
    /// See [`inspect`](Self::inspect).
    pub fn print_sql<Q>(&mut self, source: &Q) -> Result<()>
    where
        Q: QueryRenderable + ?Sized,
    {
        self.inspect_query(source, DisplayOptions::new())
    }

    /// Renders a query to text: raw in console mode, formatted otherwise.
    ///
    /// # Errors
    ///
    /// Returns the source's render error.
    pub fn sql_string<Q>(&self, source: &Q, options: impl Into<DisplayOptions>) -> Result<String>
    where
        Q: QueryRenderable + ?Sized,
    {
        let sql = source.render_query()?;
        if options.into().is_console() || !self.config.format_sql {
            Ok(sql)
        } else {
            Ok(toolbox_sql::format_with_config(&sql, &self.config.format))
        }
    }

    /// Calls `callback` on every loaded element of `collection`.
    ///
    /// No element limit applies; page the collection first if it is large.
    /// Returns the number of elements visited.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first callback error.
    pub fn walk<C, F>(&mut self, collection: &mut C, mut callback: F) -> Result<usize>
    where
        C: Collection + ?Sized,
        F: FnMut(&mut Self, &dyn Record) -> Result<()>,
    {
        let records = collection.load();
        for record in &records {
            callback(self, record.as_ref())?;
        }
        Ok(records.len())
    }

    /// Walks `collection`, printing each element's plain dump.
    ///
    /// # Errors
    ///
    /// See [`walk`](Self::walk).
    pub fn walk_dump<C>(&mut self, collection: &mut C) -> Result<usize>
    where
        C: Collection + ?Sized,
    {
        let options = DisplayOptions::new();
        self.walk(collection, |inspector, record| {
            inspector.body(&record.to_value(), &options)
        })
    }

    /// Lists registry keys, with values when `dump_values` is set.
    ///
    /// Keys starting with `_` hold host internals and print `[alot]` instead
    /// of their value. Returns the registry snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn dump_registry(
        &mut self,
        registry: &dyn Registry,
        dump_values: bool,
    ) -> Result<Vec<(String, Value)>> {
        let entries = registry_snapshot(registry);
        let mut text = String::new();
        for (key, value) in &entries {
            let _ = write!(text, "[{key}]");
            if dump_values {
                if key.starts_with('_') {
                    text.push_str(" => [alot]");
                } else {
                    let _ = write!(text, " => {value}");
                }
            }
            text.push('\n');
        }
        writeln!(self.out, "<pre>{}</pre>", escape_html(&text))?;
        Ok(entries)
    }

    /// Prints `frames` as a table of file, function and line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn print_backtrace(&mut self, frames: &[Frame]) -> Result<()> {
        let table = render_table(frames, self.config.strip_prefix.as_deref());
        writeln!(self.out, "{table}")?;
        Ok(())
    }

    /// Prints the calling frame.
    ///
    /// Without `search`, that is the first frame. With it, the first frame
    /// whose file contains `search` outside the ignored prefix. Prints nothing
    /// when no frame matches.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn print_caller(&mut self, frames: &[Frame], search: Option<&str>) -> Result<Option<Frame>> {
        let found = match search {
            None => frames.first(),
            Some(search) => find_frame(frames, search, self.config.ignore_prefix.as_deref()),
        };
        if let Some(frame) = found {
            writeln!(self.out, "<pre>{}</pre>", escape_html(&frame.to_string()))?;
        }
        Ok(found.cloned())
    }

    // -------------------------------------------------------------------------
    // Emission
    // -------------------------------------------------------------------------

    fn sql_or_placeholder<Q>(&self, source: &Q, options: &DisplayOptions) -> String
    where
        Q: QueryRenderable + ?Sized,
    {
        self.sql_string(source, options).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "query render failed, printing placeholder");
            self.config.placeholder.clone()
        })
    }

    fn heading(&mut self, type_name: &str, options: &DisplayOptions) -> Result<()> {
        if options.is_console() {
            return self.console_log(&Value::from(type_name));
        }
        writeln!(
            self.out,
            "<h3 style=\"font-weight:bold;\">{}</h3>",
            escape_html(type_name)
        )?;
        Ok(())
    }

    fn metadata(&mut self, size: usize, sql: Option<String>, options: &DisplayOptions) -> Result<()> {
        if options.is_console() {
            let mut fields = vec![("size", Value::from(size))];
            if let Some(sql) = sql {
                fields.push(("sqlString", Value::from(sql)));
            }
            return self.console_log(&Value::map(fields));
        }
        writeln!(self.out, "<h2>Collection size: {size}</h2>")?;
        if let Some(sql) = sql {
            writeln!(self.out, "<h3>Sql String:</h3>\n<pre>{}</pre>", escape_html(&sql))?;
        }
        Ok(())
    }

    fn body(&mut self, value: &Value, options: &DisplayOptions) -> Result<()> {
        if options.is_console() {
            return self.console_log(value);
        }
        let text = if options.is_vardump() {
            dump::typed(value)
        } else {
            dump::plain(value)
        };
        writeln!(self.out, "<pre>{}</pre>", escape_html(&text))?;
        Ok(())
    }

    fn console_log(&mut self, value: &Value) -> Result<()> {
        let json = to_console_json(value)?;
        writeln!(self.out, "<script>console.log({json});</script>")?;
        Ok(())
    }
}

/// Returns every registry entry without printing.
#[must_use]
pub fn registry_snapshot(registry: &dyn Registry) -> Vec<(String, Value)> {
    registry.entries()
}

/// Serializes `value` to JSON that is safe inside a `<script>` element.
///
/// # Errors
///
/// Returns [`ErrorKind::Serialization`](toolbox_foundation::ErrorKind::Serialization)
/// if serialization fails.
pub fn to_console_json(value: &Value) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|e| Error::serialization(e.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}

/// Escapes text for inclusion in markup.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
