//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, ValueKind and Error.

mod errors;
mod values;
