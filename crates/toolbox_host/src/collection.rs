//! In-memory collections and random sampling.

use std::cmp::Ordering;
use std::fmt::Write;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use toolbox_foundation::{Error, ErrorKind, Result, Value};

use crate::capability::{Collection, ModelCollection, QueryRenderable, Record, Sizeable};
use crate::model::{Model, ModelLoader};

/// Comparison applied by a collection filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterOp {
    Eq,
    Neq,
    Gt,
    Gteq,
    Lt,
    Lteq,
    In,
}

impl FilterOp {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "eq" => Some(Self::Eq),
            "neq" => Some(Self::Neq),
            "gt" => Some(Self::Gt),
            "gteq" => Some(Self::Gteq),
            "lt" => Some(Self::Lt),
            "lteq" => Some(Self::Lteq),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    fn sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Gteq => ">=",
            Self::Lt => "<",
            Self::Lteq => "<=",
            Self::In => "IN",
        }
    }

    fn matches(self, actual: Option<&Value>, expected: &Value) -> bool {
        let Some(actual) = actual else {
            return self == Self::Neq;
        };
        match self {
            Self::Eq => actual == expected,
            Self::Neq => actual != expected,
            Self::In => expected
                .as_list()
                .is_some_and(|items| items.iter().any(|item| item == actual)),
            Self::Gt | Self::Gteq | Self::Lt | Self::Lteq => {
                let Some(ordering) = compare(actual, expected) else {
                    return false;
                };
                match self {
                    Self::Gt => ordering == Ordering::Greater,
                    Self::Gteq => ordering != Ordering::Less,
                    Self::Lt => ordering == Ordering::Less,
                    _ => ordering != Ordering::Greater,
                }
            }
        }
    }
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => a.as_number()?.partial_cmp(&b.as_number()?),
    }
}

#[derive(Clone, Debug)]
struct Filter {
    attribute: String,
    op: FilterOp,
    expected: Value,
}

/// A collection over in-memory [`Model`]s.
///
/// Supports equality and comparison filters, seeded random ordering and a
/// page limit. Its query renders as the SQL a database-backed collection would
/// issue.
#[derive(Clone, Debug)]
pub struct MemoryCollection {
    type_name: String,
    models: Vec<Model>,
    filters: Vec<Filter>,
    page_size: Option<usize>,
    random: bool,
    seed: u64,
    query_failure: Option<String>,
    query: Option<String>,
}

impl MemoryCollection {
    /// Creates a collection over `models`.
    #[must_use]
    pub fn new(type_name: impl Into<String>, models: Vec<Model>) -> Self {
        let mut collection = Self {
            type_name: type_name.into(),
            models,
            filters: Vec::new(),
            page_size: None,
            random: false,
            seed: 0,
            query_failure: None,
            query: None,
        };
        collection.refresh_query();
        collection
    }

    /// Builder method to set the random ordering seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method making query rendering fail with `message`.
    #[must_use]
    pub fn with_query_failure(mut self, message: impl Into<String>) -> Self {
        self.query_failure = Some(message.into());
        self
    }

    /// The current page limit.
    #[must_use]
    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    /// Table name derived from the model type (`catalog/product` -> `catalog_product`).
    fn table(&self) -> String {
        self.type_name.replace('/', "_")
    }

    /// Every model remaining after filters, in storage order.
    fn filtered(&self) -> Vec<&Model> {
        self.models
            .iter()
            .filter(|m| {
                self.filters
                    .iter()
                    .all(|f| f.op.matches(m.get(&f.attribute), &f.expected))
            })
            .collect()
    }

    fn known_attribute(&self, attribute: &str) -> bool {
        self.models.iter().any(|m| m.get(attribute).is_some())
    }

    fn refresh_query(&mut self) {
        let mut sql = format!("SELECT `main_table`.* FROM `{}` AS `main_table`", self.table());
        for (i, filter) in self.filters.iter().enumerate() {
            let keyword = if i == 0 { "WHERE" } else { "AND" };
            let _ = write!(
                sql,
                " {keyword} (`main_table`.`{}` {} {})",
                filter.attribute,
                filter.op.sql(),
                sql_literal(&filter.expected)
            );
        }
        if self.random {
            sql.push_str(" ORDER BY RAND()");
        }
        if let Some(limit) = self.page_size {
            let _ = write!(sql, " LIMIT {limit}");
        }
        self.query = Some(sql);
    }
}

fn sql_literal(value: &Value) -> String {
    match value {
        Value::Nil => "NULL".to_string(),
        Value::Bool(b) => u8::from(*b).to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        Value::List(items) => {
            let parts: Vec<_> = items.iter().map(sql_literal).collect();
            format!("({})", parts.join(", "))
        }
        Value::Map(_) | Value::Object(_) => format!("'{}'", value.to_string().replace('\'', "''")),
    }
}

impl QueryRenderable for MemoryCollection {
    fn render_query(&self) -> Result<String> {
        if let Some(message) = &self.query_failure {
            return Err(Error::query_render(message.clone()));
        }
        self.query
            .clone()
            .ok_or_else(|| Error::query_render("query not built"))
    }
}

impl Sizeable for MemoryCollection {
    fn size(&self) -> usize {
        self.filtered().len()
    }
}

impl Collection for MemoryCollection {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn set_page_size(&mut self, size: usize) {
        self.page_size = Some(size);
        self.refresh_query();
    }

    fn query(&self) -> Option<&dyn QueryRenderable> {
        Some(self)
    }

    fn load(&mut self) -> Vec<Box<dyn Record>> {
        let mut rows: Vec<Model> = self.filtered().into_iter().cloned().collect();
        if self.random {
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
            rows.shuffle(&mut rng);
        }
        if let Some(limit) = self.page_size {
            rows.truncate(limit);
        }
        rows.into_iter()
            .map(|m| Box::new(m) as Box<dyn Record>)
            .collect()
    }
}

impl ModelCollection for MemoryCollection {
    fn add_filter(&mut self, attribute: &str, condition: &Value) -> Result<()> {
        if !self.known_attribute(attribute) {
            return Err(Error::filter_application(attribute, "unknown attribute"));
        }

        let (op, expected) = match condition {
            Value::Map(spec) => {
                let mut entries = spec.iter();
                let (Some((name, expected)), None) = (entries.next(), entries.next()) else {
                    return Err(Error::filter_application(
                        attribute,
                        "condition must have exactly one operator",
                    ));
                };
                let op = FilterOp::parse(name).ok_or_else(|| {
                    Error::filter_application(attribute, format!("unsupported operator {name}"))
                })?;
                if op == FilterOp::In && expected.as_list().is_none() {
                    return Err(Error::filter_application(attribute, "'in' expects a list"));
                }
                (op, expected.clone())
            }
            Value::Object(_) => {
                return Err(Error::filter_application(attribute, "objects cannot be filtered on"));
            }
            scalar_or_list => {
                if scalar_or_list.as_list().is_some() {
                    (FilterOp::In, scalar_or_list.clone())
                } else {
                    (FilterOp::Eq, scalar_or_list.clone())
                }
            }
        };

        self.filters.push(Filter {
            attribute: attribute.to_string(),
            op,
            expected,
        });
        self.refresh_query();
        Ok(())
    }

    fn order_random(&mut self) {
        self.random = true;
        self.refresh_query();
    }
}

/// Loads `size` random records of `type_name` matching every filter.
///
/// # Errors
///
/// Returns [`ErrorKind::FilterApplication`] naming the attribute when a filter
/// is rejected, or the loader's error if the collection cannot be created.
pub fn random_collection(
    loader: &dyn ModelLoader,
    type_name: &str,
    size: usize,
    filters: &[(&str, Value)],
) -> Result<Vec<Box<dyn Record>>> {
    let mut collection = loader.collection(type_name)?;
    collection.order_random();

    for (attribute, condition) in filters {
        if let Err(err) = collection.add_filter(attribute, condition) {
            tracing::warn!(%attribute, error = %err, "filter rejected");
            return Err(match err.kind {
                ErrorKind::FilterApplication { .. } => err,
                _ => Error::filter_application(*attribute, err.to_string()),
            });
        }
    }

    collection.set_page_size(size);
    Ok(collection.load())
}

/// Loads one random record of `type_name` matching every filter.
///
/// # Errors
///
/// See [`random_collection`].
pub fn random_model(
    loader: &dyn ModelLoader,
    type_name: &str,
    filters: &[(&str, Value)],
) -> Result<Option<Box<dyn Record>>> {
    Ok(random_collection(loader, type_name, 1, filters)?
        .into_iter()
        .next())
}
