//! Host collaborator interfaces for Toolbox.
//!
//! The debugging helpers never reach into a host framework directly. Everything
//! they need from the host goes through the traits in this crate:
//! - [`Registry`] - Request-scoped key/value store (timers, A/B flags)
//! - [`ModelLoader`] - Record lookup and collection factories
//! - [`Collection`], [`Record`], [`QueryRenderable`], [`SelfDescribing`] - Capabilities
//!
//! In-memory implementations ([`MemoryRegistry`], [`MemoryModels`],
//! [`MemoryCollection`]) back the tests and can stand in for a host.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod collection;
pub mod model;
pub mod registry;

pub use capability::{
    BrokenQuery, Collection, ModelCollection, QueryRenderable, Record, SelfDescribing, Sizeable,
};
pub use collection::{MemoryCollection, random_collection, random_model};
pub use model::{
    DEFAULT_ID_FIELD, MemoryModels, Model, ModelLoader, ORDER_MODEL, PRODUCT_MODEL, get_order,
    get_product,
};
pub use registry::{MemoryRegistry, Registry};
