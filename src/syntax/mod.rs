//! Syntax highlighting
//!
//! A deterministic, marker-based highlighter. Given a document, a
//! [`RuleSet`] and a [`DisplayMode`], [`highlight`] partitions the text
//! into styled [`Segment`]s:
//!
//! - block comments are found once over the whole document
//! - every other line is tokenized into overlapping candidates
//! - candidates are resolved into disjoint spans by start and priority
//! - gaps become plain text and each run gets its style
//!
//! The segments always concatenate back to the input.

mod block;
mod builtin;
mod engine;
mod language;
mod registry;
mod resolver;
mod rules;
mod style;
mod tokenizer;
mod tokens;

pub use block::scan_blocks;
pub use engine::{highlight, highlight_lines, line_offsets, Segment};
pub use language::LanguageDefinition;
pub use registry::RuleRegistry;
pub use resolver::resolve;
pub use rules::{CommentMarker, RuleSet};
pub use style::{style_for, Color, DisplayMode, Style};
pub use tokenizer::{tokenize_line, LineTokenizer};
pub use tokens::{Span, TokenType};
