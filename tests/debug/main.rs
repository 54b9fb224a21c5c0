//! Integration tests for Layer 2: Debug helpers
//!
//! Tests for display options, the inspector, timers and A/B comparison.

mod inspector;
mod options;
mod timer;
