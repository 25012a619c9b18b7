//! Overlap resolution
//!
//! Turns the tokenizer's overlapping candidates into a sorted, disjoint
//! span list. Candidates are visited by start offset, ties broken by
//! category priority (`Comment > String > Keyword > Type > Modifier`)
//! and then by length. A candidate that overlaps text already claimed
//! is clipped to start where the claimed text ends, or dropped if
//! nothing is left.

use std::cmp::Reverse;

use super::tokens::Span;

/// Resolve candidates into disjoint spans with strictly increasing starts
pub fn resolve(mut candidates: Vec<Span>) -> Vec<Span> {
    candidates.sort_by_key(|span| (span.start, span.token_type.priority(), Reverse(span.end)));

    let mut resolved: Vec<Span> = Vec::with_capacity(candidates.len());
    let mut cursor = 0;
    for mut span in candidates {
        if span.start < cursor {
            span.start = cursor;
        }
        if span.is_empty() {
            continue;
        }
        cursor = span.end;
        resolved.push(span);
    }
    resolved
}
