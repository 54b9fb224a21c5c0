//! Integration tests for Error types
//!
//! Tests error kinds, messages and context.

use std::io;

use toolbox_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn timer_errors_are_misuse() {
    assert!(Error::invalid_timer_phase("pause").is_timer_misuse());
    assert!(Error::missing_timer_start("load1").is_timer_misuse());
    assert!(!Error::host("down").is_timer_misuse());
}

#[test]
fn messages_name_the_problem() {
    assert_eq!(
        Error::filter_application("color", "unknown attribute").to_string(),
        "adding filter for color is not possible: unknown attribute"
    );
    assert!(
        Error::missing_timer_start("load1")
            .to_string()
            .contains("\"load1\"")
    );
}

#[test]
fn io_errors_become_output_errors() {
    let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
    assert!(matches!(err.kind, ErrorKind::Output(_)));
}

#[test]
fn context_is_attached() {
    let err = Error::serialization("nan")
        .with_context(ErrorContext::new().with_source("console").with_frame("inspect"));
    let context = err.context.unwrap();
    assert_eq!(context.to_string(), "in console\n  at inspect\n");
}
