// src/report/json.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::insights::{
    CategoryStats, ComplexityTier, Connectivity, RareIntegration, Relationships,
};
use crate::analysis::{Analysis, DensityEntry, FrequencyEntry, PairEntry, StackEntry};
use crate::pipeline::ProcessingStats;
use crate::taxonomy::Category;

/// Serialized shape of `analysis.json`. Tables are ranked lists so the
/// document has plain string keys throughout.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub stats: &'a ProcessingStats,
    pub min_stack_size: usize,
    pub min_pair_count: usize,
    pub min_stack_count: usize,
    pub frequency: Vec<FrequencyEntry>,
    pub pairs: Vec<PairEntry>,
    pub stacks: Vec<StackEntry>,
    pub density: Vec<DensityEntry>,
    pub categories: &'a BTreeMap<String, Category>,
    pub category_stats: &'a [CategoryStats],
    pub complexity: &'a BTreeMap<ComplexityTier, usize>,
    pub relationships: &'a Relationships,
    pub connectivity: &'a [Connectivity],
    pub rare: &'a [RareIntegration],
}

impl<'a> JsonReport<'a> {
    pub fn new(a: &'a Analysis) -> Self {
        Self {
            stats: &a.standardized.stats,
            min_stack_size: a.aggregates.min_stack_size,
            min_pair_count: a.min_pair_count,
            min_stack_count: a.min_stack_count,
            frequency: a.aggregates.ranked_frequency(),
            pairs: a.reported_pairs(),
            stacks: a.reported_stacks(),
            density: a.aggregates.density_entries(),
            categories: &a.standardized.categories,
            category_stats: &a.categories,
            complexity: &a.complexity,
            relationships: &a.relationships,
            connectivity: &a.connectivity,
            rare: &a.rare,
        }
    }
}

pub fn render_json(a: &Analysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(a))
}
