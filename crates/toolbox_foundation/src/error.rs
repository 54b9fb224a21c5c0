//! Error types for the Toolbox crates.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;

use thiserror::Error;

/// The main error type for Toolbox operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid timer phase error.
    #[must_use]
    pub fn invalid_timer_phase(phase: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTimerPhase(phase.into()))
    }

    /// Creates a missing timer start error.
    #[must_use]
    pub fn missing_timer_start(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingTimerStart { key: key.into() })
    }

    /// Creates a query rendering error.
    #[must_use]
    pub fn query_render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::QueryRender(message.into()))
    }

    /// Creates a filter application error.
    #[must_use]
    pub fn filter_application(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::FilterApplication {
            attribute: attribute.into(),
            reason: reason.into(),
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a generic host collaborator error.
    #[must_use]
    pub fn host(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Host(message.into()))
    }

    /// Returns true if this is a caller-contract violation of the timer.
    #[must_use]
    pub fn is_timer_misuse(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidTimerPhase(_) | ErrorKind::MissingTimerStart { .. }
        )
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Output(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Timer marked with a phase other than start, stop or mid.
    #[error("invalid timer phase {0:?}: expected 'start', 'stop' or 'mid'")]
    InvalidTimerPhase(String),

    /// Timer stopped or read without a matching start.
    #[error("no timer was started under key {key:?}")]
    MissingTimerStart {
        /// The registry key that had no start time.
        key: String,
    },

    /// A query could not be rendered to text.
    #[error("query render failed: {0}")]
    QueryRender(String),

    /// A collection filter could not be applied.
    #[error("adding filter for {attribute} is not possible: {reason}")]
    FilterApplication {
        /// The attribute the filter targeted.
        attribute: String,
        /// Why the host rejected the filter.
        reason: String,
    },

    /// A value could not be serialized for console output.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Host collaborator failure.
    #[error("host error: {0}")]
    Host(String),

    /// Writing output failed.
    #[error("output error: {0}")]
    Output(#[source] io::Error),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation or component that produced the error.
    pub source: Option<String>,
    /// Call frames leading to the error, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source operation.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  at {frame}")?;
            }
        }
        Ok(())
    }
}
