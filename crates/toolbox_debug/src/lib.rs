//! Inspection and timing helpers for debugging a host application.
//!
//! This crate provides:
//! - [`Inspector`] - Readable markup or console-log output for values,
//!   records, collections and queries
//! - [`Timer`] - Named stopwatches stored in the host [`Registry`](toolbox_host::Registry)
//! - [`compare_ab`] - Two-run A/B timing on top of the timer
//! - [`backtrace`] - Stack capture, caller lookup and backtrace tables
//! - [`log()`] - Quick log lines through `tracing`
//!
//! Nothing here terminates the process. Caller mistakes such as stopping a
//! timer that never started come back as [`Error`](toolbox_foundation::Error)s.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ab;
pub mod backtrace;
pub mod config;
pub mod dump;
pub mod inspect;
pub mod log;
pub mod options;
pub mod timer;

pub use ab::{AbReport, ab, compare_ab};
pub use backtrace::Frame;
pub use config::{DEFAULT_COLLECTION_LIMIT, InspectorConfig, SQL_PLACEHOLDER};
pub use inspect::{Inspector, Subject, registry_snapshot};
pub use log::{log, log_default};
pub use options::{DisplayOptions, parse_options};
pub use timer::{Clock, DEFAULT_TIMER_ID, ManualClock, Phase, SystemClock, Timer, timer_key};
