//! Rule sets for syntax highlighting
//!
//! A `RuleSet` is the lexical vocabulary of one language: keyword-class
//! word lists plus comment markers and string delimiters. Rule sets can
//! be built in code or loaded from TOML:
//!
//! ```toml
//! keywords  = ["fun", "val", "class"]
//! types     = ["Int", "String"]
//! modifiers = ["private", "override"]
//! comments  = ["//", "/* */"]
//! strings   = ["\"", "'"]
//! ```
//!
//! Absent fields are empty.

use std::fs;
use std::io;
use std::path::Path;

use toml::{Table, Value};

use super::tokens::TokenType;
use crate::error::{HiliteError, Result};

/// Opener written alone that implies its conventional closer.
const C_BLOCK_OPEN: &str = "/*";
const C_BLOCK_CLOSE: &str = "*/";

/// How a comment marker behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentMarker<'a> {
    /// Runs to end of line
    Line(&'a str),
    /// Runs from `open` to the next `close`, possibly across lines
    Block { open: &'a str, close: &'a str },
}

impl<'a> CommentMarker<'a> {
    /// Classify a comment entry.
    ///
    /// `"OPEN CLOSE"` is a block marker, as is a bare `"/*"`.
    /// Anything else is a line marker.
    pub fn classify(entry: &'a str) -> Self {
        let mut parts = entry.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(open), Some(close), None) => CommentMarker::Block { open, close },
            (Some(C_BLOCK_OPEN), None, None) => CommentMarker::Block {
                open: C_BLOCK_OPEN,
                close: C_BLOCK_CLOSE,
            },
            _ => CommentMarker::Line(entry),
        }
    }
}

/// Lexical vocabulary for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    keywords: Vec<String>,
    types: Vec<String>,
    modifiers: Vec<String>,
    comments: Vec<String>,
    strings: Vec<String>,
}

impl RuleSet {
    /// Create an empty rule set (highlights nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set keywords
    pub fn with_keywords<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = collect_entries(entries);
        self
    }

    /// Builder: set type names
    pub fn with_types<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = collect_entries(entries);
        self
    }

    /// Builder: set modifiers
    pub fn with_modifiers<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = collect_entries(entries);
        self
    }

    /// Builder: set comment markers
    pub fn with_comments<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = collect_entries(entries);
        self
    }

    /// Builder: set string delimiters
    pub fn with_strings<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings = collect_entries(entries);
        self
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Word lists paired with the category they produce
    pub fn vocabularies(&self) -> [(TokenType, &[String]); 3] {
        [
            (TokenType::Keyword, &self.keywords),
            (TokenType::Type, &self.types),
            (TokenType::Modifier, &self.modifiers),
        ]
    }

    /// Classified comment markers, in declaration order.
    ///
    /// An entry equal to the closer of a block marker in the same set
    /// (e.g. `"*/"` listed next to `"/*"`) is not a marker on its own.
    pub fn comment_markers(&self) -> Vec<CommentMarker<'_>> {
        let markers: Vec<CommentMarker<'_>> = self
            .comments
            .iter()
            .map(|entry| CommentMarker::classify(entry))
            .collect();

        let closers: Vec<&str> = markers
            .iter()
            .filter_map(|marker| match marker {
                CommentMarker::Block { close, .. } => Some(*close),
                CommentMarker::Line(_) => None,
            })
            .collect();

        markers
            .into_iter()
            .filter(|marker| match marker {
                CommentMarker::Line(entry) => !closers.contains(entry),
                CommentMarker::Block { .. } => true,
            })
            .collect()
    }

    /// Line-style comment markers only
    pub fn line_comment_markers(&self) -> Vec<&str> {
        self.comment_markers()
            .into_iter()
            .filter_map(|marker| match marker {
                CommentMarker::Line(entry) => Some(entry),
                CommentMarker::Block { .. } => None,
            })
            .collect()
    }

    /// Block-style comment markers as `(open, close)` pairs
    pub fn block_comment_markers(&self) -> Vec<(&str, &str)> {
        self.comment_markers()
            .into_iter()
            .filter_map(|marker| match marker {
                CommentMarker::Block { open, close } => Some((open, close)),
                CommentMarker::Line(_) => None,
            })
            .collect()
    }

    /// Check whether the set can highlight anything at all
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.types.is_empty()
            && self.modifiers.is_empty()
            && self.comments.is_empty()
            && self.strings.is_empty()
    }

    /// Parse a rule set from TOML text.
    ///
    /// Only text that is not TOML at all is an error. Badly typed fields
    /// degrade to empty lists.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        Ok(Self {
            keywords: string_list(&table, "keywords"),
            types: string_list(&table, "types"),
            modifiers: string_list(&table, "modifiers"),
            comments: string_list(&table, "comments"),
            strings: string_list(&table, "strings"),
        })
    }

    /// Load a rule set from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => HiliteError::FileNotFound(path.display().to_string()),
            _ => HiliteError::Io(err),
        })?;
        Self::from_toml_str(&contents)
    }
}

fn collect_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(Into::into)
        .filter(|entry: &String| !entry.is_empty())
        .collect()
}

/// Read an optional array-of-strings field.
///
/// Missing is empty; non-string items are skipped; a field that is not
/// an array is ignored with a warning and also reads as empty.
fn string_list(table: &Table, key: &str) -> Vec<String> {
    match table.get(key) {
        None => Vec::new(),
        Some(Value::Array(items)) => collect_entries(items.iter().filter_map(|item| item.as_str())),
        Some(other) => {
            tracing::warn!(
                "`{}` must be an array of strings, found {}; treating it as empty",
                key,
                other.type_str()
            );
            Vec::new()
        }
    }
}
