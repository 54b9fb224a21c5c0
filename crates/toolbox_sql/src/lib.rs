//! SQL lexing and pretty-printing for Toolbox.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of SQL text, comments and quoting included
//! - [`format`] - Multi-line layout of queries for display
//! - [`compress`] - Single-line rendering with comments stripped
//! - [`split_statements`] - Statement splitting on top-level `;`
//!
//! The formatter targets the MySQL dialect emitted by e-commerce ORMs. It never
//! fails: input it cannot make sense of is passed through as-is.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod format;
pub mod keywords;
pub mod lexer;
pub mod token;

pub use format::{FormatConfig, compress, format, format_with_config, split_statements};
pub use keywords::classify;
pub use lexer::Lexer;
pub use token::{Span, Token, TokenKind, WordClass};
