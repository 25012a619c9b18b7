//! Java language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::RuleSet;

/// Create Java language definition
pub fn java_language() -> LanguageDefinition {
    let rules = RuleSet::new()
        .with_keywords([
            "assert", "break", "case", "catch", "class", "continue", "default", "do", "else",
            "enum", "extends", "false", "finally", "for", "if", "implements", "import",
            "instanceof", "interface", "new", "null", "package", "return", "super", "switch",
            "this", "throw", "throws", "true", "try", "var", "while", "yield", "record",
        ])
        .with_types([
            "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
            "Boolean", "Integer", "Long", "Object", "String", "List", "Map",
        ])
        .with_modifiers([
            "abstract", "final", "native", "private", "protected", "public", "static",
            "strictfp", "synchronized", "transient", "volatile", "sealed", "non-sealed",
        ])
        .with_comments(["//", "/* */"])
        .with_strings(["\"", "'"]);

    LanguageDefinition::new("Java", rules).with_extensions(&["java"])
}
