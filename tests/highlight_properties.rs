//! Engine-level behaviour: the worked scenarios plus the partition
//! properties checked over a spread of generated documents.

use std::path::Path;

use hilite::syntax::{
    highlight, highlight_lines, line_offsets, scan_blocks, DisplayMode, RuleRegistry, RuleSet,
    Segment, TokenType,
};

fn pairs<'d>(segments: &[Segment<'d>]) -> Vec<(TokenType, &'d str)> {
    segments.iter().map(|s| (s.token_type, s.text)).collect()
}

fn concat(segments: &[Segment<'_>]) -> String {
    segments.iter().map(|s| s.text).collect()
}

/// Category of every byte, for comparing differently-split outputs
fn byte_categories(segments: &[Segment<'_>]) -> Vec<TokenType> {
    segments
        .iter()
        .flat_map(|s| std::iter::repeat(s.token_type).take(s.text.len()))
        .collect()
}

fn kotlin_rules() -> RuleSet {
    RuleSet::new()
        .with_keywords(["val", "class", "fun", "in"])
        .with_types(["Int", "String"])
        .with_modifiers(["private", "data"])
        .with_comments(["//", "/*"])
        .with_strings(["\"", "'"])
}

#[test]
fn test_scenario_line_comment_then_keyword() {
    let rules = RuleSet::new().with_keywords(["val"]).with_comments(["//"]);
    let segments = highlight("// hi\nval x = 5", &rules, DisplayMode::Light);
    assert_eq!(
        pairs(&segments),
        vec![
            (TokenType::Comment, "// hi"),
            (TokenType::Plain, "\n"),
            (TokenType::Keyword, "val"),
            (TokenType::Plain, " x = 5"),
        ]
    );
}

#[test]
fn test_scenario_block_comment_spans_lines() {
    let rules = RuleSet::new().with_keywords(["val"]).with_comments(["/* */"]);
    let segments = highlight("/* a\nb */\nval y", &rules, DisplayMode::Dark);
    assert_eq!(
        pairs(&segments),
        vec![
            (TokenType::Comment, "/* a\nb */"),
            (TokenType::Plain, "\n"),
            (TokenType::Keyword, "val"),
            (TokenType::Plain, " y"),
        ]
    );
}

#[test]
fn test_scenario_unterminated_string() {
    let rules = RuleSet::new().with_strings(["\""]);
    let segments = highlight("let s = \"abc", &rules, DisplayMode::Light);
    assert_eq!(
        pairs(&segments),
        vec![(TokenType::Plain, "let s = "), (TokenType::String, "\"abc")]
    );
}

#[test]
fn test_scenario_whole_word() {
    let rules = RuleSet::new().with_keywords(["class"]);
    let segments = highlight("classic", &rules, DisplayMode::Light);
    assert_eq!(pairs(&segments), vec![(TokenType::Plain, "classic")]);
}

#[test]
fn test_plain_text_identity() {
    let doc = "nothing\nmatches here\n\n  at all";
    for mode in DisplayMode::ALL {
        let segments = highlight(doc, &kotlin_rules(), mode);
        assert_eq!(pairs(&segments), vec![(TokenType::Plain, doc)]);
    }
    let segments = highlight(doc, &RuleSet::new(), DisplayMode::Light);
    assert_eq!(pairs(&segments), vec![(TokenType::Plain, doc)]);
}

#[test]
fn test_block_suppresses_everything_inside() {
    let doc = "/* val \"s\" // x\nclass Int */";
    let segments = highlight(doc, &kotlin_rules(), DisplayMode::Light);
    assert_eq!(pairs(&segments), vec![(TokenType::Comment, doc)]);
}

#[test]
fn test_unterminated_block_runs_to_end_of_document() {
    let doc = "val a\n/* open\nval b\nclass C";
    let segments = highlight(doc, &kotlin_rules(), DisplayMode::Light);
    assert_eq!(
        pairs(&segments),
        vec![
            (TokenType::Keyword, "val"),
            (TokenType::Plain, " a\n"),
            (TokenType::Comment, "/* open\nval b\nclass C"),
        ]
    );
}

#[test]
fn test_line_comment_stops_at_newline() {
    let doc = "x // val\nval";
    let segments = highlight(doc, &kotlin_rules(), DisplayMode::Light);
    assert_eq!(
        pairs(&segments),
        vec![
            (TokenType::Plain, "x "),
            (TokenType::Comment, "// val"),
            (TokenType::Plain, "\n"),
            (TokenType::Keyword, "val"),
        ]
    );
}

#[test]
fn test_string_wins_over_keyword_inside() {
    let doc = "f(\"fun in class\")";
    let segments = highlight(doc, &kotlin_rules(), DisplayMode::Light);
    assert_eq!(
        pairs(&segments),
        vec![
            (TokenType::Plain, "f("),
            (TokenType::String, "\"fun in class\""),
            (TokenType::Plain, ")"),
        ]
    );
}

#[test]
fn test_comment_marker_inside_string_clips_not_duplicates() {
    let doc = "\"a // b\" c";
    let segments = highlight(doc, &kotlin_rules(), DisplayMode::Light);
    assert_eq!(concat(&segments), doc);
    assert_eq!(segments[0].token_type, TokenType::String);
    assert_eq!(segments[0].text, "\"a // b\"");
    // the comment candidate survives only past the string
    assert_eq!(segments[1].token_type, TokenType::Comment);
    assert_eq!(segments[1].text, " c");
}

#[test]
fn test_mixed_categories_on_one_line() {
    let doc = "private data class P(val n: Int) // done";
    let segments = highlight(doc, &kotlin_rules(), DisplayMode::Dark);
    assert_eq!(
        pairs(&segments),
        vec![
            (TokenType::Modifier, "private"),
            (TokenType::Plain, " "),
            (TokenType::Modifier, "data"),
            (TokenType::Plain, " "),
            (TokenType::Keyword, "class"),
            (TokenType::Plain, " P("),
            (TokenType::Keyword, "val"),
            (TokenType::Plain, " n: "),
            (TokenType::Type, "Int"),
            (TokenType::Plain, ") "),
            (TokenType::Comment, "// done"),
        ]
    );
}

#[test]
fn test_crlf_and_unicode_are_preserved() {
    let doc = "val π = \"ü\"\r\n// ñ\r\n";
    let segments = highlight(doc, &kotlin_rules(), DisplayMode::Light);
    assert_eq!(concat(&segments), doc);
}

/// Deterministic document generator over a small alphabet of fragments
fn generated_documents() -> Vec<String> {
    const FRAGMENTS: [&str; 18] = [
        "val", "class", "classic", "Int", "private", " ", "  ", "\n", "\"", "'", "//", "/*",
        "*/", "x", "_in", "in", "é", "\r\n",
    ];

    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut docs = Vec::new();
    for len in 0..120 {
        let mut doc = String::new();
        for _ in 0..len {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            doc.push_str(FRAGMENTS[(state % FRAGMENTS.len() as u64) as usize]);
        }
        docs.push(doc);
    }
    docs
}

#[test]
fn test_partition_properties_hold_for_generated_documents() {
    let rule_sets = [
        kotlin_rules(),
        RuleSet::new(),
        RuleSet::new()
            .with_comments(["#", "/* */", "' '"])
            .with_strings(["\"", "//"])
            .with_keywords(["in", "x"]),
    ];

    for doc in generated_documents() {
        for rules in &rule_sets {
            for mode in DisplayMode::ALL {
                let segments = highlight(&doc, rules, mode);

                // lossless
                assert_eq!(concat(&segments), doc);

                // contiguous, non-empty, increasing, coalesced
                let mut pos = 0;
                for segment in &segments {
                    assert_eq!(segment.start, pos, "gap or overlap in {:?}", doc);
                    assert!(!segment.text.is_empty());
                    pos = segment.end();
                }
                for pair in segments.windows(2) {
                    assert_ne!(pair[0].token_type, pair[1].token_type);
                }

                // every block-comment byte is emitted as comment
                let categories = byte_categories(&segments);
                for block in scan_blocks(&doc, rules) {
                    assert!(categories[block.start..block.end]
                        .iter()
                        .all(|t| *t == TokenType::Comment));
                }
            }
        }
    }
}

#[test]
fn test_line_ranges_agree_with_full_pass() {
    let rules = kotlin_rules();
    for doc in generated_documents().iter().step_by(7) {
        let full = byte_categories(&highlight(doc, &rules, DisplayMode::Light));
        let blocks = scan_blocks(doc, &rules);
        let lines: Vec<(usize, &str)> = line_offsets(doc).collect();

        for first in 0..lines.len() {
            let last = (first + 2).min(lines.len());
            let partial = highlight_lines(doc, &blocks, &rules, DisplayMode::Light, first..last);

            let start = lines[first].0;
            let end = lines[last - 1].0 + lines[last - 1].1.len();
            assert_eq!(concat(&partial), &doc[start..end]);
            assert_eq!(byte_categories(&partial), &full[start..end]);
        }
    }
}

#[test]
fn test_registry_selects_rules_by_extension() {
    let registry = RuleRegistry::new();
    let source = "fun main() { val x = 1 } // kt";

    let kotlin_rules = registry.rules_for_path(Path::new("Main.kt"));
    let kotlin = highlight(source, kotlin_rules, DisplayMode::Light);
    assert_eq!(kotlin[0].token_type, TokenType::Keyword);

    let default_rules = registry.rules_for_path(Path::new("main.txt"));
    let fallback = highlight(source, default_rules, DisplayMode::Light);
    assert_eq!(fallback[0].token_type, TokenType::Plain);
    assert_eq!(fallback.last().map(|s| s.token_type), Some(TokenType::Comment));
}

#[test]
fn test_python_docstring_block() {
    let registry = RuleRegistry::new();
    let rules = registry.rules_for_path(Path::new("mod.py"));
    let doc = "def f():\n    \"\"\"doc\n    return\"\"\"\n    return None";
    let segments = highlight(doc, rules, DisplayMode::Light);
    assert_eq!(concat(&segments), doc);
    assert_eq!(segments[0].token_type, TokenType::Keyword);
    // both docstring lines are comment from their first column
    assert!(segments
        .iter()
        .any(|s| s.token_type == TokenType::Comment && s.text.starts_with("    \"\"\"doc\n")));
    assert_eq!(
        segments.last().map(|s| (s.token_type, s.text)),
        Some((TokenType::Keyword, "None"))
    );
}
