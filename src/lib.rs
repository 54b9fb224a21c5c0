//! Toolbox - Debug inspection and timing helpers for e-commerce hosts
//!
//! This crate re-exports all layers of the Toolbox system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: toolbox_debug      - Inspector, timer, A/B timing, backtraces
//! Layer 1: toolbox_host       - Host collaborator traits and in-memory fixtures
//!          toolbox_sql        - SQL lexer and pretty-printer
//! Layer 0: toolbox_foundation - Core types (Value, Error)
//! ```

pub use toolbox_debug as debug;
pub use toolbox_foundation as foundation;
pub use toolbox_host as host;
pub use toolbox_sql as sql;
