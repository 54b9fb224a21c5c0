//! Integration tests across all layers
//!
//! Property tests for the documented guarantees and end-to-end debugging
//! workflows through the root crate.

mod properties;
mod workflow;
