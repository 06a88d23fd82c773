// src/pipeline/mod.rs
//! # Standardization pipeline
//!
//! Raw scrape records → Validator → Normalizer → Categorizer → per-app sets.
//!
//! Every stage is a pure function of its input plus the [`Taxonomy`]; nothing
//! here fails. Empty fields become apps without integrations, rejected
//! mentions are counted and dropped, unknown names stay `Uncategorized`.
//!
//! ```text
//! records::parse_records → pipeline::standardize → analysis::aggregate
//! ```

mod categorize;
mod normalize;
mod validate;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::records::RawRecord;
use crate::taxonomy::{Category, Taxonomy};

pub use categorize::categorize;
pub use normalize::normalize;
pub use validate::{rejection, validate, Rejection};

/// A normalized display name plus its category.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalIntegration {
    pub name: String,
    pub category: Category,
}

impl CanonicalIntegration {
    /// Validate → normalize → categorize a single raw mention.
    pub fn from_raw(raw: &str, taxonomy: &Taxonomy) -> Result<Self, Rejection> {
        if let Some(reason) = rejection(raw, taxonomy) {
            return Err(reason);
        }
        let name = normalize(raw, taxonomy);
        let category = categorize(&name, taxonomy);
        Ok(Self { name, category })
    }
}

/// One app and the canonical integrations it declares.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIntegrationSet {
    pub app_id: String,
    pub app_name: Option<String>,
    pub integrations: BTreeSet<String>,
}

impl AppIntegrationSet {
    pub fn new<I, S>(app_id: impl Into<String>, integrations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            app_id: app_id.into(),
            app_name: None,
            integrations: integrations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize { self.integrations.len() }
    pub fn is_empty(&self) -> bool { self.integrations.is_empty() }

    /// Display label: name when known, id otherwise.
    pub fn label(&self) -> &str {
        self.app_name.as_deref().unwrap_or(&self.app_id)
    }
}

/// Counters collected while standardizing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total_apps: usize,
    pub apps_with_integrations: usize,
    pub empty_fields: usize,
    pub raw_mentions: usize,
    pub rejected: BTreeMap<Rejection, usize>,
    pub total_mentions: usize,
    pub unique_integrations: usize,
    pub uncategorized: usize,
}

impl ProcessingStats {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Output of [`standardize`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Standardized {
    pub apps: Vec<AppIntegrationSet>,
    /// Category of every canonical name seen.
    pub categories: BTreeMap<String, Category>,
    pub stats: ProcessingStats,
}

impl Standardized {
    pub fn category_of(&self, name: &str) -> Category {
        self.categories.get(name).copied().unwrap_or(Category::Uncategorized)
    }
}

/// Run every record through the pipeline. Duplicate app ids merge into one
/// set; output keeps first-seen order.
pub fn standardize(records: &[RawRecord], taxonomy: &Taxonomy) -> Standardized {
    let mut stats = ProcessingStats::default();
    let mut apps: Vec<AppIntegrationSet> = Vec::with_capacity(records.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut categories: BTreeMap<String, Category> = BTreeMap::new();

    for rec in records {
        if rec.raw_integrations.is_empty() {
            stats.empty_fields += 1;
        }

        let slot = match index.get(rec.app_id.as_str()) {
            Some(&ix) => {
                logd!("Pipeline: duplicate app id {:?}, merging", rec.app_id);
                ix
            }
            None => {
                index.insert(rec.app_id.as_str(), apps.len());
                apps.push(AppIntegrationSet {
                    app_id: rec.app_id.clone(),
                    app_name: rec.app_name.clone(),
                    integrations: BTreeSet::new(),
                });
                apps.len() - 1
            }
        };

        for raw in &rec.raw_integrations {
            stats.raw_mentions += 1;
            match CanonicalIntegration::from_raw(raw, taxonomy) {
                Ok(canonical) => {
                    categories.entry(canonical.name.clone()).or_insert(canonical.category);
                    apps[slot].integrations.insert(canonical.name);
                }
                Err(reason) => {
                    *stats.rejected.entry(reason).or_default() += 1;
                    logd!("Pipeline: rejected {:?} ({:?})", raw, reason);
                }
            }
        }
    }

    stats.total_apps = apps.len();
    stats.apps_with_integrations = apps.iter().filter(|a| !a.is_empty()).count();
    stats.total_mentions = apps.iter().map(|a| a.len()).sum();
    stats.unique_integrations = categories.len();
    stats.uncategorized = categories
        .values()
        .filter(|c| **c == Category::Uncategorized)
        .count();

    logf!(
        "Pipeline: apps={} with_integrations={} raw={} rejected={} unique={} uncategorized={}",
        stats.total_apps,
        stats.apps_with_integrations,
        stats.raw_mentions,
        stats.rejected_total(),
        stats.unique_integrations,
        stats.uncategorized
    );

    Standardized { apps, categories, stats }
}
