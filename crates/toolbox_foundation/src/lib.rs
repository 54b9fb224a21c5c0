//! Core values and errors for Toolbox.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type inspected, dumped and stored in registries
//! - [`ValueKind`] - Kind descriptors used by the typed dump
//! - [`Error`] - Error types with context, shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use kind::ValueKind;
pub use value::{ObjectValue, Value, ValueList, ValueMap};

/// Result alias used throughout the Toolbox crates.
pub type Result<T> = std::result::Result<T, Error>;
