//! Highlight engine
//!
//! Drives block scanning, per-line tokenization, resolution and style
//! lookup over a document and emits a gap-free segment sequence whose
//! texts concatenate back to the document exactly.

use std::ops::Range;

use super::block;
use super::resolver::resolve;
use super::rules::RuleSet;
use super::style::{style_for, DisplayMode, Style};
use super::tokenizer::LineTokenizer;
use super::tokens::{Span, TokenType};

/// A run of document text sharing one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'d> {
    /// Byte offset of `text` in the document
    pub start: usize,
    /// The covered text, borrowed from the document
    pub text: &'d str,
    /// Category of the run
    pub token_type: TokenType,
    /// Style for the run in the requested display mode
    pub style: Style,
}

impl<'d> Segment<'d> {
    /// Byte offset just past the end of this segment
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Highlight a whole document.
pub fn highlight<'d>(document: &'d str, rules: &RuleSet, mode: DisplayMode) -> Vec<Segment<'d>> {
    let blocks = block::scan_blocks(document, rules);
    highlight_lines(document, &blocks, rules, mode, 0..usize::MAX)
}

/// Highlight only the lines in `lines` (0-based, end-exclusive).
///
/// `blocks` must come from [`block::scan_blocks`] over the same
/// document. The result covers those lines and the line breaks between
/// them, and classifies every byte the way a full [`highlight`] would.
pub fn highlight_lines<'d>(
    document: &'d str,
    blocks: &[Span],
    rules: &RuleSet,
    mode: DisplayMode,
    lines: Range<usize>,
) -> Vec<Segment<'d>> {
    let tokenizer = LineTokenizer::new(rules);
    let mut out = SegmentBuilder::new(document, mode);

    let count = lines.end.saturating_sub(lines.start);
    for (nth, (start, line)) in line_offsets(document).skip(lines.start).take(count).enumerate() {
        if nth > 0 {
            // the '\n' that ended the previous line
            let newline = start - 1;
            let token_type = if block::contains(blocks, newline) {
                TokenType::Comment
            } else {
                TokenType::Plain
            };
            out.push(newline, start, token_type);
        }

        let end = start + line.len();
        let in_block = block::intersects_any(blocks, start, end);

        let mut pos = start;
        for span in resolve(tokenizer.tokenize(line, in_block)) {
            let span = span.offset(start);
            if span.start > pos {
                out.push(pos, span.start, TokenType::Plain);
            }
            out.push(span.start, span.end, span.token_type);
            pos = span.end;
        }
        if pos < end {
            out.push(pos, end, TokenType::Plain);
        }
    }

    let segments = out.finish();
    tracing::trace!(
        bytes = document.len(),
        segments = segments.len(),
        blocks = blocks.len(),
        "highlight pass"
    );
    segments
}

/// Lines split on `'\n'` with their absolute byte offsets.
///
/// A trailing newline yields a final empty line.
pub fn line_offsets(document: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut start = 0;
    document.split('\n').map(move |line| {
        let line_start = start;
        start += line.len() + 1;
        (line_start, line)
    })
}

/// Accumulates segments, merging neighbours of the same category
struct SegmentBuilder<'d> {
    document: &'d str,
    mode: DisplayMode,
    segments: Vec<Segment<'d>>,
}

impl<'d> SegmentBuilder<'d> {
    fn new(document: &'d str, mode: DisplayMode) -> Self {
        Self {
            document,
            mode,
            segments: Vec::new(),
        }
    }

    fn push(&mut self, start: usize, end: usize, token_type: TokenType) {
        if start >= end {
            return;
        }
        let document = self.document;
        if let Some(last) = self.segments.last_mut() {
            if last.token_type == token_type && last.end() == start {
                last.text = &document[last.start..end];
                return;
            }
        }
        self.segments.push(Segment {
            start,
            text: &document[start..end],
            token_type,
            style: style_for(token_type, self.mode),
        });
    }

    fn finish(self) -> Vec<Segment<'d>> {
        self.segments
    }
}
