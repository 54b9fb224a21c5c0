//! Request-scoped key/value registry.

use std::sync::Arc;

use toolbox_foundation::Value;

/// Host-provided key/value store scoped to a request or process.
///
/// Keys are caller-provided and schemaless. Timers and A/B flags share the
/// same key space.
pub trait Registry {
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value);

    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Removes `key`, returning its previous value.
    fn unset(&mut self, key: &str) -> Option<Value>;

    /// Returns a snapshot of every entry.
    fn entries(&self) -> Vec<(String, Value)>;

    /// Returns true if `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if `key` holds a truthy value.
    fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_truthy)
    }
}

/// In-memory registry backed by a persistent map.
///
/// Entries are reported in key order.
#[derive(Clone, Debug, Default)]
pub struct MemoryRegistry {
    entries: im::OrdMap<Arc<str>, Value>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Registry for MemoryRegistry {
    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(Arc::from(key), value);
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn unset(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    fn entries(&self) -> Vec<(String, Value)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}
