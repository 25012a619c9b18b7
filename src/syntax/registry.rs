//! Rule set registry
//!
//! Maps file extensions to rule sets. The engine takes whatever rule
//! set it is handed; choosing one for a file happens here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;
use super::rules::RuleSet;
use crate::error::Result;

/// File stem that replaces the fallback rule set in a rules directory
const DEFAULT_RULES_STEM: &str = "default";

/// Extension-keyed collection of rule sets with a fallback
pub struct RuleRegistry {
    /// Loaded language definitions, by name
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
    /// Rules for files no language claims
    default_rules: RuleSet,
}

impl RuleRegistry {
    /// Create a registry holding the built-in languages
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for lang in builtin::all_languages() {
            registry.add_language(lang);
        }
        registry
    }

    /// Create a registry with no languages and the built-in fallback
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
            default_rules: builtin::default_rules(),
        }
    }

    /// Add a language definition, replacing any with the same name.
    ///
    /// Extensions the new definition claims are taken away from their
    /// previous owner. An owner left with no extensions is dropped.
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        if let Some(old) = self.languages.remove(&name) {
            for ext in &old.extensions {
                if !lang.extensions.contains(ext) && self.extension_map.get(ext) == Some(&name) {
                    self.extension_map.remove(ext);
                }
            }
        }
        for ext in &lang.extensions {
            if let Some(previous) = self.extension_map.insert(ext.clone(), name.clone()) {
                if previous != name {
                    self.release_extension(&previous, ext);
                }
            }
        }
        tracing::debug!("registered language {} for {:?}", name, lang.extensions);
        self.languages.insert(name, lang);
    }

    fn release_extension(&mut self, owner: &str, ext: &str) {
        let orphaned = match self.languages.get_mut(owner) {
            Some(lang) => {
                lang.extensions.retain(|e| e != ext);
                lang.extensions.is_empty()
            }
            None => return,
        };
        if orphaned {
            tracing::debug!("dropping language {}: .{} was its last extension", owner, ext);
            self.languages.remove(owner);
        }
    }

    /// Replace the fallback rule set
    pub fn set_default_rules(&mut self, rules: RuleSet) {
        self.default_rules = rules;
    }

    /// Rules used when no extension matches
    pub fn default_rules(&self) -> &RuleSet {
        &self.default_rules
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Get a language definition by name
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(name)
    }

    /// Rule set for a file, falling back to the default rules
    pub fn rules_for_path(&self, filename: &Path) -> &RuleSet {
        self.detect_language(filename)
            .and_then(|name| self.languages.get(name))
            .map(|lang| &lang.rules)
            .unwrap_or(&self.default_rules)
    }

    /// Load every `<ext>.toml` in `dir`.
    ///
    /// Each file becomes a language named after its extension and
    /// overrides whatever held that extension before; `default.toml`
    /// replaces the fallback. Files that fail to parse are skipped with
    /// a warning; files that define nothing are applied with one.
    /// Returns the number of rule files applied.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut loaded = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_lowercase(),
                None => continue,
            };

            let rules = match RuleSet::load(&path) {
                Ok(rules) => rules,
                Err(err) => {
                    tracing::warn!("ignoring rule file {}: {}", path.display(), err);
                    continue;
                }
            };
            if rules.is_empty() {
                tracing::warn!("rule file {} defines no rules", path.display());
            }

            if stem == DEFAULT_RULES_STEM {
                self.set_default_rules(rules);
            } else {
                let lang = LanguageDefinition::new(&stem, rules).with_extensions(&[stem.as_str()]);
                self.add_language(lang);
            }
            loaded += 1;
        }
        tracing::debug!("loaded {} rule files from {}", loaded, dir.display());
        Ok(loaded)
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
