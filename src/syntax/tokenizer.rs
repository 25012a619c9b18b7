//! Per-line candidate extraction
//!
//! The tokenizer reports every candidate range it finds on a line,
//! unmerged and possibly overlapping. Choosing between overlapping
//! candidates is the resolver's job.

use std::cmp::Reverse;

use regex::Regex;

use super::rules::RuleSet;
use super::tokens::{Span, TokenType};

/// One vocabulary category compiled into a single case-insensitive
/// alternation
struct WordRule {
    /// Entries longest first, then a required non-word char or end of line
    pattern: Regex,
    /// Category to assign to accepted matches
    token_type: TokenType,
}

impl WordRule {
    fn new(entries: &[String], token_type: TokenType) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let mut sorted: Vec<&str> = entries.iter().map(String::as_str).collect();
        // leftmost-first alternation: the longest entry that fits wins
        sorted.sort_by_key(|entry| Reverse(entry.len()));
        let escaped: Vec<String> = sorted.into_iter().map(regex::escape).collect();
        let source = format!(
            r"(?i)({})(?:[^\p{{Alphabetic}}\p{{N}}_]|$)",
            escaped.join("|")
        );
        match Regex::new(&source) {
            Ok(pattern) => Some(Self { pattern, token_type }),
            Err(err) => {
                tracing::warn!("skipping {} vocabulary: {}", token_type.name(), err);
                None
            }
        }
    }

    /// Push every whole-word occurrence in `line`
    fn find_all(&self, line: &str, out: &mut Vec<Span>) {
        let mut pos = 0;
        while let Some(word) = self.pattern.captures_at(line, pos).and_then(|caps| caps.get(1)) {
            let before = line[..word.start()].chars().next_back();
            if !before.map_or(false, is_word_char) {
                out.push(Span::new(word.start(), word.end(), self.token_type));
            }
            // step one char so overlapping occurrences are still seen
            pos = word.start() + line[word.start()..].chars().next().map_or(1, char::len_utf8);
            if pos > line.len() {
                break;
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenizer for lines outside any block comment.
///
/// Built once per highlight pass: each vocabulary category is one
/// compiled pattern, reused for every line.
pub struct LineTokenizer<'r> {
    line_markers: Vec<&'r str>,
    delimiters: &'r [String],
    words: Vec<WordRule>,
}

impl<'r> LineTokenizer<'r> {
    /// Compile the line-level parts of a rule set
    pub fn new(rules: &'r RuleSet) -> Self {
        let words = rules
            .vocabularies()
            .into_iter()
            .filter_map(|(token_type, entries)| WordRule::new(entries, token_type))
            .collect();

        Self {
            line_markers: rules.line_comment_markers(),
            delimiters: rules.strings(),
            words,
        }
    }

    /// Collect candidate spans for one line, in line-local offsets.
    ///
    /// A line touched by a block comment is a single comment span and
    /// nothing else is looked for.
    pub fn tokenize(&self, line: &str, in_block: bool) -> Vec<Span> {
        if in_block {
            return if line.is_empty() {
                Vec::new()
            } else {
                vec![Span::new(0, line.len(), TokenType::Comment)]
            };
        }

        let mut spans = Vec::new();
        if let Some(span) = self.line_comment(line) {
            spans.push(span);
        }
        for delimiter in self.delimiters {
            string_spans(line, delimiter, &mut spans);
        }
        for word in &self.words {
            word.find_all(line, &mut spans);
        }
        spans
    }

    /// The earliest line-comment marker opens a comment to end of line
    fn line_comment(&self, line: &str) -> Option<Span> {
        self.line_markers
            .iter()
            .filter_map(|marker| line.find(marker))
            .min()
            .map(|start| Span::new(start, line.len(), TokenType::Comment))
    }
}

/// Strings close on the next occurrence of the same delimiter,
/// or run to end of line.
fn string_spans(line: &str, delimiter: &str, out: &mut Vec<Span>) {
    let mut pos = 0;
    while let Some(found) = line[pos..].find(delimiter) {
        let start = pos + found;
        let body = start + delimiter.len();
        match line[body..].find(delimiter) {
            Some(offset) => {
                let end = body + offset + delimiter.len();
                out.push(Span::new(start, end, TokenType::String));
                pos = end;
            }
            None => {
                out.push(Span::new(start, line.len(), TokenType::String));
                return;
            }
        }
    }
}

/// Tokenize a single line with a freshly compiled rule set
pub fn tokenize_line(line: &str, rules: &RuleSet, in_block: bool) -> Vec<Span> {
    LineTokenizer::new(rules).tokenize(line, in_block)
}
