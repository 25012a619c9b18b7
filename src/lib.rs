//! hilite - deterministic lexical highlighting
//!
//! The [`syntax`] module holds the engine: hand it a document, a
//! [`syntax::RuleSet`] and a [`syntax::DisplayMode`] and it returns a
//! lossless, non-overlapping partition of the text into styled segments.
//! Rule selection, configuration and terminal output live beside it.

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{HiliteError, Result};
pub use syntax::{highlight, DisplayMode, RuleRegistry, RuleSet, Segment, TokenType};
