//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::RuleSet;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let rules = RuleSet::new()
        .with_keywords([
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ])
        .with_types([
            "bool", "bytes", "dict", "float", "frozenset", "int", "list", "object", "set",
            "str", "tuple",
        ])
        .with_modifiers(["@staticmethod", "@classmethod", "@property", "self", "cls"])
        .with_comments(["#", "\"\"\" \"\"\""])
        .with_strings(["\"", "'"]);

    LanguageDefinition::new("Python", rules).with_extensions(&["py", "pyw", "pyi"])
}
