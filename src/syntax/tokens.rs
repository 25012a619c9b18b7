//! Token categories and spans
//!
//! This module defines the lexical categories the highlighter
//! recognizes and the `Span` type used for candidate and resolved ranges.

/// Lexical category of a region of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Line or block comments
    Comment,
    /// Delimited string literals
    String,
    /// Language keywords (if, class, fun, ...)
    Keyword,
    /// Type names (Int, String, ...)
    Type,
    /// Modifiers (public, override, ...)
    Modifier,
    /// Text no rule matched
    Plain,
}

impl TokenType {
    /// Categories a rule can produce, highest priority first
    pub const HIGHLIGHTED: [TokenType; 5] = [
        TokenType::Comment,
        TokenType::String,
        TokenType::Keyword,
        TokenType::Type,
        TokenType::Modifier,
    ];

    /// Conflict rank, lower wins.
    pub fn priority(&self) -> u8 {
        match self {
            TokenType::Comment => 0,
            TokenType::String => 1,
            TokenType::Keyword => 2,
            TokenType::Type => 3,
            TokenType::Modifier => 4,
            TokenType::Plain => u8::MAX,
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "Comment",
            TokenType::String => "String",
            TokenType::Keyword => "Keyword",
            TokenType::Type => "Type",
            TokenType::Modifier => "Modifier",
            TokenType::Plain => "Plain",
        }
    }
}

/// A categorized byte range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category of the covered text
    pub token_type: TokenType,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, token_type: TokenType) -> Self {
        Self {
            start,
            end,
            token_type,
        }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Check if this span shares at least one byte with `[start, end)`
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        start < self.end && end > self.start
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Shift both ends by `offset`
    pub fn offset(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset, self.token_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let ranks: Vec<u8> = TokenType::HIGHLIGHTED.iter().map(|t| t.priority()).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert!(TokenType::Modifier.priority() < TokenType::Plain.priority());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, TokenType::Keyword);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }

    #[test]
    fn test_span_intersects() {
        let span = Span::new(5, 10, TokenType::Comment);
        assert!(span.intersects(0, 6));
        assert!(span.intersects(9, 20));
        assert!(!span.intersects(0, 5));
        assert!(!span.intersects(10, 12));
        // an empty interval strictly inside still counts
        assert!(span.intersects(7, 7));
    }

    #[test]
    fn test_span_offset() {
        let span = Span::new(1, 3, TokenType::String).offset(10);
        assert_eq!(span, Span::new(11, 13, TokenType::String));
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
    }
}
