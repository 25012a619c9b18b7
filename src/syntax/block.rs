//! Block comment scanning
//!
//! Block comments are found once over the whole document, before any
//! line is tokenized, since they are the only construct that can cross
//! a line break.

use super::rules::RuleSet;
use super::tokens::{Span, TokenType};

/// Find every block comment in `document`.
///
/// The result is sorted by start and pairwise disjoint. An opener with
/// no closer runs to the end of the document.
pub fn scan_blocks(document: &str, rules: &RuleSet) -> Vec<Span> {
    let mut spans = Vec::new();
    for (open, close) in rules.block_comment_markers() {
        scan_marker(document, open, close, &mut spans);
    }
    disjoint(spans)
}

fn scan_marker(document: &str, open: &str, close: &str, spans: &mut Vec<Span>) {
    let mut pos = 0;
    while let Some(found) = document[pos..].find(open) {
        let start = pos + found;
        let body = start + open.len();
        match document[body..].find(close) {
            Some(offset) => {
                let end = body + offset + close.len();
                spans.push(Span::new(start, end, TokenType::Comment));
                pos = end;
            }
            None => {
                spans.push(Span::new(start, document.len(), TokenType::Comment));
                return;
            }
        }
    }
}

/// Earliest start wins; later overlapping spans are clipped or dropped.
fn disjoint(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_key(|span| (span.start, std::cmp::Reverse(span.end)));

    let mut result: Vec<Span> = Vec::with_capacity(spans.len());
    let mut cursor = 0;
    for mut span in spans {
        span.start = span.start.max(cursor);
        if span.is_empty() {
            continue;
        }
        cursor = span.end;
        result.push(span);
    }
    result
}

/// Check whether any block span touches `[start, end)`
pub fn intersects_any(blocks: &[Span], start: usize, end: usize) -> bool {
    // blocks are sorted and disjoint, so ends are sorted too
    let idx = blocks.partition_point(|block| block.end <= start);
    blocks
        .get(idx)
        .map_or(false, |block| block.intersects(start, end))
}

/// Check whether byte `pos` lies inside a block span
pub fn contains(blocks: &[Span], pos: usize) -> bool {
    let idx = blocks.partition_point(|block| block.end <= pos);
    blocks.get(idx).map_or(false, |block| block.contains(pos))
}
