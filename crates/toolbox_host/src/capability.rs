//! Capability traits that host types opt into.
//!
//! The inspector decides how to print something by which of these traits it
//! implements, never by probing for methods at runtime.

use toolbox_foundation::{Error, Result, Value};

/// Something that knows how many elements it holds.
pub trait Sizeable {
    /// Declared element count, independent of any page limit.
    fn size(&self) -> usize;
}

/// Something that can render itself to a query-language string.
pub trait QueryRenderable {
    /// Renders the query text.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be rendered.
    fn render_query(&self) -> Result<String>;
}

impl QueryRenderable for str {
    fn render_query(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl QueryRenderable for String {
    fn render_query(&self) -> Result<String> {
        Ok(self.clone())
    }
}

/// Something that can produce its own debug representation.
pub trait SelfDescribing {
    /// Returns the value to inspect in place of the raw object.
    fn describe(&self) -> Value;
}

/// A structured domain object.
pub trait Record {
    /// Declared type name, printed as the object's heading.
    fn type_name(&self) -> &str;

    /// Raw structural form of the object.
    fn to_value(&self) -> Value;

    /// The self-describing capability, if this record has one.
    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        None
    }
}

/// A lazily loaded result set.
pub trait Collection: Sizeable {
    /// Declared type name of the collection.
    fn type_name(&self) -> &str;

    /// Limits how many elements the next [`load`](Collection::load) materializes.
    fn set_page_size(&mut self, size: usize);

    /// The query behind this collection, if it has one.
    fn query(&self) -> Option<&dyn QueryRenderable> {
        None
    }

    /// Materializes the current page.
    fn load(&mut self) -> Vec<Box<dyn Record>>;
}

/// A collection of host models that can be filtered and randomly ordered.
pub trait ModelCollection: Collection {
    /// Restricts the collection by `attribute` matching `condition`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot apply the filter.
    fn add_filter(&mut self, attribute: &str, condition: &Value) -> Result<()>;

    /// Orders the collection randomly.
    fn order_random(&mut self);
}

/// A query source that always fails to render.
///
/// Handy for exercising the inspector's fallback path.
#[derive(Clone, Debug)]
pub struct BrokenQuery(pub String);

impl QueryRenderable for BrokenQuery {
    fn render_query(&self) -> Result<String> {
        Err(Error::query_render(self.0.clone()))
    }
}
