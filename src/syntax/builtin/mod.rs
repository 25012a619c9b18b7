//! Built-in language definitions
//!
//! Rule sets for the languages recognized without any rule files,
//! plus the fallback used for everything else.

mod java;
mod kotlin;
mod python;

use super::language::LanguageDefinition;
use super::rules::RuleSet;

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        kotlin::kotlin_language(),
        java::java_language(),
        python::python_language(),
    ]
}

/// Rules for files no language claims: C-style comments and quotes only
pub fn default_rules() -> RuleSet {
    RuleSet::new()
        .with_comments(["//", "/* */", "#"])
        .with_strings(["\"", "'"])
}
