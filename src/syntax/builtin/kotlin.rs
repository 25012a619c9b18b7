//! Kotlin language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::RuleSet;

/// Create Kotlin language definition
pub fn kotlin_language() -> LanguageDefinition {
    let rules = RuleSet::new()
        .with_keywords([
            "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
            "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
            "true", "try", "typealias", "typeof", "val", "var", "when", "while", "by", "catch",
            "constructor", "finally", "import", "init", "where",
        ])
        .with_types([
            "Any", "Boolean", "Byte", "Char", "Double", "Float", "Int", "List", "Long", "Map",
            "MutableList", "MutableMap", "Nothing", "Set", "Short", "String", "Unit",
        ])
        .with_modifiers([
            "abstract", "annotation", "companion", "const", "data", "enum", "external", "final",
            "inline", "inner", "internal", "lateinit", "open", "operator", "override", "private",
            "protected", "public", "sealed", "suspend", "vararg",
        ])
        .with_comments(["//", "/* */"])
        .with_strings(["\"\"\"", "\"", "'"]);

    LanguageDefinition::new("Kotlin", rules).with_extensions(&["kt", "kts"])
}
