//! Model records and the loader interface.

use std::collections::BTreeMap;
use std::sync::Arc;

use toolbox_foundation::{Error, Result, Value, ValueMap};

use crate::capability::{ModelCollection, Record, SelfDescribing};
use crate::collection::MemoryCollection;

/// Model type name of catalog products.
pub const PRODUCT_MODEL: &str = "catalog/product";

/// Model type name of sales orders.
pub const ORDER_MODEL: &str = "sales/order";

/// Default primary key field of host models.
pub const DEFAULT_ID_FIELD: &str = "entity_id";

/// Loads host records by type name.
pub trait ModelLoader {
    /// Loads a single record.
    ///
    /// Looks `id` up in `id_field`, or in the primary key when `id_field` is
    /// `None`. Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the host lookup itself fails.
    fn load(&self, type_name: &str, id: &Value, id_field: Option<&str>)
    -> Result<Option<Box<dyn Record>>>;

    /// Creates a collection over every record of `type_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type has no collection.
    fn collection(&self, type_name: &str) -> Result<Box<dyn ModelCollection>>;
}

/// Loads a product by `id`, trying `field` first when given.
///
/// When the field lookup finds nothing, falls back to the primary key.
///
/// # Errors
///
/// Propagates loader failures.
pub fn get_product(
    loader: &dyn ModelLoader,
    id: impl Into<Value>,
    field: Option<&str>,
) -> Result<Option<Box<dyn Record>>> {
    let id = id.into();
    if let Some(field) = field {
        if let Some(product) = loader.load(PRODUCT_MODEL, &id, Some(field))? {
            return Ok(Some(product));
        }
    }
    loader.load(PRODUCT_MODEL, &id, None)
}

/// Loads an order by `id`, in `field` when given, else by primary key.
///
/// # Errors
///
/// Propagates loader failures.
pub fn get_order(
    loader: &dyn ModelLoader,
    id: impl Into<Value>,
    field: Option<&str>,
) -> Result<Option<Box<dyn Record>>> {
    loader.load(ORDER_MODEL, &id.into(), field)
}

/// Generic data record with a type name and a field map.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    type_name: Arc<str>,
    data: ValueMap,
}

impl Model {
    /// Creates an empty model of the given type.
    #[must_use]
    pub fn new(type_name: impl Into<Arc<str>>) -> Self {
        Self {
            type_name: type_name.into(),
            data: ValueMap::new(),
        }
    }

    /// Builder method to set a field.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(Arc::from(key), value.into());
        self
    }

    /// Sets a field.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.data.insert(Arc::from(key), value.into());
    }

    /// Returns a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns the primary key.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.get(DEFAULT_ID_FIELD)
    }

    /// Returns every field.
    #[must_use]
    pub fn data(&self) -> &ValueMap {
        &self.data
    }
}

impl Record for Model {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn to_value(&self) -> Value {
        Value::object(Arc::clone(&self.type_name), self.data.clone())
    }

    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        Some(self)
    }
}

impl SelfDescribing for Model {
    fn describe(&self) -> Value {
        Value::Map(self.data.clone())
    }
}

/// In-memory model loader.
#[derive(Clone, Debug, Default)]
pub struct MemoryModels {
    models: BTreeMap<String, Vec<Model>>,
    seed: u64,
}

impl MemoryModels {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the seed used by random ordering.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to add a model.
    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.insert(model);
        self
    }

    /// Adds a model under its own type name.
    pub fn insert(&mut self, model: Model) {
        self.models
            .entry(model.type_name().to_string())
            .or_default()
            .push(model);
    }

    /// Number of models of `type_name`.
    #[must_use]
    pub fn count(&self, type_name: &str) -> usize {
        self.models.get(type_name).map_or(0, Vec::len)
    }
}

impl ModelLoader for MemoryModels {
    fn load(
        &self,
        type_name: &str,
        id: &Value,
        id_field: Option<&str>,
    ) -> Result<Option<Box<dyn Record>>> {
        let field = id_field.unwrap_or(DEFAULT_ID_FIELD);
        let found = self
            .models
            .get(type_name)
            .and_then(|models| models.iter().find(|m| m.get(field) == Some(id)));
        Ok(found.map(|m| Box::new(m.clone()) as Box<dyn Record>))
    }

    fn collection(&self, type_name: &str) -> Result<Box<dyn ModelCollection>> {
        let models = self
            .models
            .get(type_name)
            .ok_or_else(|| Error::host(format!("no collection for model type {type_name}")))?;
        Ok(Box::new(
            MemoryCollection::new(type_name, models.clone()).with_seed(self.seed),
        ))
    }
}
