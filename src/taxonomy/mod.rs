// src/taxonomy/mod.rs
//! TOML-driven integration taxonomy.
//!
//! Holds the three lookup tables the standardization stages depend on:
//! alias mapping (raw spelling → canonical name), category mapping
//! (canonical name → [`Category`]) and the generic-term exclusion set.
//! The default taxonomy ships as `data/taxonomy.toml` and is embedded at
//! build time; user files replace or extend it without code changes.
//!
//! All lookups are keyed by [`fold`]: whitespace-collapsed, lowercased.

mod category;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::consts::{MAX_WORDS, MIN_CHARS};
use crate::core::sanitize::{fold, normalize_ws};

pub use category::Category;

const BUILTIN_TOML: &str = include_str!("../../data/taxonomy.toml");

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid taxonomy TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize taxonomy: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("alias `{0}` has an empty target")]
    EmptyAlias(String),
    #[error("alias `{alias}` is spelled more than once with different targets `{first}` and `{second}`")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
    #[error("`{name}` is listed under both {first} and {second}")]
    DuplicateCategory {
        name: String,
        first: Category,
        second: Category,
    },
    #[error("alias `{alias}` maps canonical name `{canonical}` to `{target}`")]
    ConflictingAlias {
        alias: String,
        canonical: String,
        target: String,
    },
}

/// On-disk shape of a taxonomy file. Every field is optional so a user file
/// can carry only the parts it wants to add or override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_words: Option<usize>,
    pub generic_terms: Vec<String>,
    pub aliases: BTreeMap<String, String>,
    pub categories: BTreeMap<String, Vec<String>>,
}

impl TaxonomyFile {
    pub fn from_toml(toml_str: &str) -> Result<Self, TaxonomyError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Layer `other` on top of `self`. Scalars and aliases from `other` win;
    /// a name re-listed under another category moves there.
    pub fn layer(&mut self, other: TaxonomyFile) {
        if other.min_chars.is_some() { self.min_chars = other.min_chars; }
        if other.max_words.is_some() { self.max_words = other.max_words; }

        for term in other.generic_terms {
            if !self.generic_terms.iter().any(|t| fold(t) == fold(&term)) {
                self.generic_terms.push(term);
            }
        }

        for (raw, canonical) in other.aliases {
            self.aliases.retain(|k, _| fold(k) != fold(&raw));
            self.aliases.insert(raw, canonical);
        }

        for (cat, names) in other.categories {
            for name in names {
                let key = fold(&name);
                for members in self.categories.values_mut() {
                    members.retain(|m| fold(m) != key);
                }
                self.categories.entry(cat.clone()).or_default().push(name);
            }
        }
    }
}

/// Compiled, lookup-ready taxonomy.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    source: TaxonomyFile,
    aliases: HashMap<String, String>,
    categories: HashMap<String, Category>,
    generic_terms: HashSet<String>,
    min_chars: usize,
    max_words: usize,
}

impl Taxonomy {
    /// The default taxonomy embedded from `data/taxonomy.toml`.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::from_toml(BUILTIN_TOML)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TaxonomyError> {
        Self::compile(TaxonomyFile::from_toml(toml_str)?)
    }

    /// Load a standalone taxonomy file (replaces the builtin one).
    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        let text = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Extend this taxonomy with the tables of another TOML document.
    pub fn merge_toml(&self, toml_str: &str) -> Result<Self, TaxonomyError> {
        let mut merged = self.source.clone();
        merged.layer(TaxonomyFile::from_toml(toml_str)?);
        Self::compile(merged)
    }

    pub fn compile(source: TaxonomyFile) -> Result<Self, TaxonomyError> {
        // Explicit aliases first
        let mut aliases: HashMap<String, String> = HashMap::new();
        for (raw, canonical) in &source.aliases {
            let canonical = normalize_ws(canonical);
            if canonical.is_empty() {
                return Err(TaxonomyError::EmptyAlias(raw.clone()));
            }
            match aliases.get(&fold(raw)) {
                Some(first) if *first != canonical => {
                    return Err(TaxonomyError::DuplicateAlias {
                        alias: fold(raw),
                        first: first.clone(),
                        second: canonical,
                    });
                }
                _ => {
                    aliases.insert(fold(raw), canonical);
                }
            }
        }

        // Categories (single membership)
        let mut categories: HashMap<String, Category> = HashMap::new();
        let mut canonical_names: Vec<String> = aliases.values().cloned().collect();
        for (key, names) in &source.categories {
            let cat: Category = key
                .parse()
                .map_err(|_| TaxonomyError::UnknownCategory(key.clone()))?;
            for name in names {
                let name = normalize_ws(name);
                match categories.get(&fold(&name)) {
                    Some(&first) if first != cat => {
                        return Err(TaxonomyError::DuplicateCategory { name, first, second: cat });
                    }
                    _ => {
                        categories.insert(fold(&name), cat);
                    }
                }
                canonical_names.push(name);
            }
        }

        // Every canonical name resolves to itself. An explicit alias that
        // sends a canonical spelling elsewhere would break that.
        for canonical in canonical_names {
            let key = fold(&canonical);
            match aliases.get(&key) {
                Some(target) if *target != canonical => {
                    return Err(TaxonomyError::ConflictingAlias {
                        alias: key,
                        canonical,
                        target: target.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    aliases.insert(key, canonical);
                }
            }
        }

        let generic_terms = source.generic_terms.iter().map(|t| fold(t)).collect();
        let min_chars = source.min_chars.unwrap_or(MIN_CHARS);
        let max_words = source.max_words.unwrap_or(MAX_WORDS);

        Ok(Self { source, aliases, categories, generic_terms, min_chars, max_words })
    }

    /// Canonical name registered for this spelling, if any.
    pub fn alias(&self, raw: &str) -> Option<&str> {
        self.aliases.get(&fold(raw)).map(|s| s.as_str())
    }

    /// Category assigned to this canonical name, if curated.
    pub fn category(&self, canonical: &str) -> Option<Category> {
        self.categories.get(&fold(canonical)).copied()
    }

    pub fn is_generic(&self, raw: &str) -> bool {
        self.generic_terms.contains(&fold(raw))
    }

    pub fn min_chars(&self) -> usize { self.min_chars }
    pub fn max_words(&self) -> usize { self.max_words }
    pub fn alias_count(&self) -> usize { self.aliases.len() }
    pub fn categorized_count(&self) -> usize { self.categories.len() }

    /// Raw tables this taxonomy was compiled from.
    pub fn source(&self) -> &TaxonomyFile { &self.source }

    pub fn to_toml(&self) -> Result<String, TaxonomyError> {
        Ok(toml::to_string_pretty(&self.source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_compiles() {
        let tax = Taxonomy::builtin().unwrap();
        assert_eq!(tax.alias("GA4"), Some("Google Analytics"));
        assert_eq!(tax.alias("  meta   PIXEL "), Some("Facebook Pixel"));
        assert_eq!(tax.category("Google Analytics"), Some(Category::Marketing));
        assert!(tax.is_generic("API"));
        assert_eq!(tax.min_chars(), 2);
        assert_eq!(tax.max_words(), 5);
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        let tax = Taxonomy::builtin().unwrap();
        assert_eq!(tax.alias("eBay"), Some("eBay"));
        assert_eq!(tax.alias("shipstation"), Some("ShipStation"));
        assert_eq!(tax.alias("canada post"), Some("Canada Post"));
    }

    #[test]
    fn printed_taxonomy_reloads() {
        let tax = Taxonomy::builtin().unwrap();
        let text = tax.to_toml().unwrap();
        let again = Taxonomy::from_toml(&text).unwrap();
        assert_eq!(again.alias_count(), tax.alias_count());
        assert_eq!(again.categorized_count(), tax.categorized_count());
    }
}
