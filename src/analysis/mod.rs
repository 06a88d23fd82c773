// src/analysis/mod.rs
//! Pattern statistics over standardized app sets.
//!
//! [`aggregate`] builds the four core tables; [`insights`] derives the
//! secondary views the report shows. [`Analysis`] bundles both together with
//! the standardized input so the renderers and the GUI share one value.

pub mod aggregate;
pub mod insights;

use std::collections::BTreeMap;

use crate::config::options::AnalysisOptions;
use crate::pipeline::{self, Standardized};
use crate::records::RawRecord;
use crate::taxonomy::Taxonomy;

pub use aggregate::{
    aggregate, aggregate_with, Aggregates, CooccurrencePairTable, DensityEntry,
    DensityHistogram, FrequencyEntry, FrequencyTable, PairEntry, StackEntry, StackTable,
};
pub use insights::{CategoryStats, ComplexityTier, Connectivity, RareIntegration, Relationships};

#[derive(Clone, Debug)]
pub struct Analysis {
    pub standardized: Standardized,
    pub aggregates: Aggregates,
    pub complexity: BTreeMap<ComplexityTier, usize>,
    pub rare: Vec<RareIntegration>,
    pub relationships: Relationships,
    pub connectivity: Vec<Connectivity>,
    pub categories: Vec<CategoryStats>,
    /// Report cut-offs; the tables themselves stay complete.
    pub min_pair_count: usize,
    pub min_stack_count: usize,
}

impl Analysis {
    /// Aggregate + insights over already standardized sets.
    pub fn from_standardized(standardized: Standardized, opts: &AnalysisOptions) -> Self {
        let apps = &standardized.apps;
        let aggregates = aggregate_with(apps, opts.min_stack_size);
        let complexity = insights::complexity(&aggregates);
        let rare = insights::rare_integrations(apps, &aggregates, opts.rare_threshold);
        let relationships = insights::relationships(apps, &aggregates);
        let connectivity = insights::connectivity(&aggregates);
        let categories =
            insights::category_stats(apps, &standardized.categories, &aggregates);

        logf!(
            "Analysis: apps={} integrations={} pairs={} stacks={} rare={}",
            aggregates.total_apps,
            aggregates.frequency.len(),
            aggregates.pairs.len(),
            aggregates.stacks.len(),
            rare.len()
        );

        Self {
            standardized,
            aggregates,
            complexity,
            rare,
            relationships,
            connectivity,
            categories,
            min_pair_count: opts.min_pair_count,
            min_stack_count: opts.min_stack_count,
        }
    }

    /// Ranked pairs that clear the pair cut-off.
    pub fn reported_pairs(&self) -> Vec<PairEntry> {
        self.aggregates.common_pairs(self.min_pair_count)
    }

    /// Ranked stacks that clear the stack cut-off.
    pub fn reported_stacks(&self) -> Vec<StackEntry> {
        self.aggregates.common_stacks(self.min_stack_count)
    }

    pub fn total_apps(&self) -> usize {
        self.aggregates.total_apps
    }
}

/// Records → pipeline → aggregates → insights.
pub fn analyze(records: &[RawRecord], taxonomy: &Taxonomy, opts: &AnalysisOptions) -> Analysis {
    Analysis::from_standardized(pipeline::standardize(records, taxonomy), opts)
}
