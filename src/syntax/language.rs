//! Language definitions
//!
//! A `LanguageDefinition` names a rule set and the file extensions it
//! applies to. The engine never sees it; only the registry does.

use super::rules::RuleSet;

/// A named rule set plus the extensions it is selected for
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Kotlin", "Python")
    pub name: String,
    /// File extensions without the dot (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Lexical vocabulary
    pub rules: RuleSet,
}

impl LanguageDefinition {
    /// Create a language with no extensions
    pub fn new(name: &str, rules: RuleSet) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules,
        }
    }

    /// Add a file extension (stored lowercase)
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.trim_start_matches('.').to_lowercase());
    }

    /// Builder form of [`add_extension`](Self::add_extension)
    pub fn with_extensions(mut self, exts: &[&str]) -> Self {
        for ext in exts {
            self.add_extension(ext);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions_normalized() {
        let lang = LanguageDefinition::new("Test", RuleSet::new()).with_extensions(&[".TST", "tst2"]);
        assert_eq!(lang.extensions, vec!["tst".to_string(), "tst2".to_string()]);
        assert_eq!(lang.name, "Test");
    }
}
