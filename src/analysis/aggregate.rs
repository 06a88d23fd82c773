// src/analysis/aggregate.rs
use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::consts::{MIN_STACK_FLOOR, MIN_STACK_SIZE};
use crate::pipeline::AppIntegrationSet;

/// Integration name → apps containing it.
pub type FrequencyTable = BTreeMap<String, usize>;
/// Unordered pair, stored `(lesser, greater)` → apps containing both.
pub type CooccurrencePairTable = BTreeMap<(String, String), usize>;
/// Sorted member list (exact set) → apps declaring exactly that set.
pub type StackTable = BTreeMap<Vec<String>, usize>;
/// Integrations per app → apps with exactly that many.
pub type DensityHistogram = BTreeMap<usize, usize>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Aggregates {
    pub total_apps: usize,
    pub min_stack_size: usize,
    pub frequency: FrequencyTable,
    pub pairs: CooccurrencePairTable,
    pub stacks: StackTable,
    pub density: DensityHistogram,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub integration: String,
    pub apps: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEntry {
    pub first: String,
    pub second: String,
    pub apps: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry {
    pub members: Vec<String>,
    pub apps: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityEntry {
    pub integrations: usize,
    pub apps: usize,
}

/// Order a pair so lookups don't depend on argument order.
pub fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b { (a.to_string(), b.to_string()) } else { (b.to_string(), a.to_string()) }
}

/// Aggregate with the default stack threshold (3).
pub fn aggregate(app_sets: &[AppIntegrationSet]) -> Aggregates {
    aggregate_with(app_sets, MIN_STACK_SIZE)
}

/// Frequency, pair co-occurrence, exact-set stacks and density in one pass.
///
/// Stacks count exact sets only: an app with four integrations adds one to
/// its own four-member bucket and to none of its three-member subsets.
/// Thresholds below 2 are raised to 2.
pub fn aggregate_with(app_sets: &[AppIntegrationSet], min_stack_size: usize) -> Aggregates {
    let min_stack_size = min_stack_size.max(MIN_STACK_FLOOR);
    let mut agg = Aggregates {
        total_apps: app_sets.len(),
        min_stack_size,
        ..Aggregates::default()
    };

    for app in app_sets {
        // BTreeSet iteration is sorted, so (members[i], members[j]) is already ordered.
        let members: Vec<&String> = app.integrations.iter().collect();

        for name in &members {
            *agg.frequency.entry((*name).clone()).or_default() += 1;
        }

        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                *agg.pairs.entry(((*a).clone(), (*b).clone())).or_default() += 1;
            }
        }

        if members.len() >= min_stack_size {
            let key: Vec<String> = members.iter().map(|s| (*s).clone()).collect();
            *agg.stacks.entry(key).or_default() += 1;
        }

        *agg.density.entry(members.len()).or_default() += 1;
    }

    logd!(
        "Aggregate: apps={} integrations={} pairs={} stacks={}",
        agg.total_apps,
        agg.frequency.len(),
        agg.pairs.len(),
        agg.stacks.len()
    );
    agg
}

impl Aggregates {
    pub fn frequency_of(&self, name: &str) -> usize {
        self.frequency.get(name).copied().unwrap_or(0)
    }

    pub fn pair_count(&self, a: &str, b: &str) -> usize {
        self.pairs.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    /// Sum of set sizes across all apps.
    pub fn total_mentions(&self) -> usize {
        self.density.iter().map(|(count, apps)| count * apps).sum()
    }

    /// Count desc, then name.
    pub fn ranked_frequency(&self) -> Vec<FrequencyEntry> {
        let mut v: Vec<FrequencyEntry> = self
            .frequency
            .iter()
            .map(|(k, &n)| FrequencyEntry { integration: k.clone(), apps: n })
            .collect();
        v.sort_by(|a, b| b.apps.cmp(&a.apps).then_with(|| a.integration.cmp(&b.integration)));
        v
    }

    /// Count desc; ties by the concatenated pair names, then the pair itself.
    pub fn ranked_pairs(&self) -> Vec<PairEntry> {
        let mut v: Vec<PairEntry> = self
            .pairs
            .iter()
            .map(|((a, b), &n)| PairEntry { first: a.clone(), second: b.clone(), apps: n })
            .collect();
        v.sort_by(|x, y| {
            y.apps
                .cmp(&x.apps)
                .then_with(|| concat_cmp(x, y))
                .then_with(|| (&x.first, &x.second).cmp(&(&y.first, &y.second)))
        });
        v
    }

    /// Count desc, then member list.
    pub fn ranked_stacks(&self) -> Vec<StackEntry> {
        let mut v: Vec<StackEntry> = self
            .stacks
            .iter()
            .map(|(k, &n)| StackEntry { members: k.clone(), apps: n })
            .collect();
        v.sort_by(|a, b| b.apps.cmp(&a.apps).then_with(|| a.members.cmp(&b.members)));
        v
    }

    /// Ranked pairs shared by at least `min_apps` apps.
    pub fn common_pairs(&self, min_apps: usize) -> Vec<PairEntry> {
        let mut v = self.ranked_pairs();
        v.retain(|p| p.apps >= min_apps);
        v
    }

    /// Ranked stacks declared by at least `min_apps` apps.
    pub fn common_stacks(&self, min_apps: usize) -> Vec<StackEntry> {
        let mut v = self.ranked_stacks();
        v.retain(|s| s.apps >= min_apps);
        v
    }

    /// Ascending integration count.
    pub fn density_entries(&self) -> Vec<DensityEntry> {
        self.density
            .iter()
            .map(|(&k, &n)| DensityEntry { integrations: k, apps: n })
            .collect()
    }
}

fn concat_cmp(x: &PairEntry, y: &PairEntry) -> Ordering {
    x.first
        .chars()
        .chain(x.second.chars())
        .cmp(y.first.chars().chain(y.second.chars()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_tables() {
        let agg = aggregate(&[]);
        assert_eq!(agg.total_apps, 0);
        assert!(agg.frequency.is_empty());
        assert!(agg.pairs.is_empty());
        assert!(agg.stacks.is_empty());
        assert!(agg.density.is_empty());
    }

    #[test]
    fn pair_lookup_ignores_order() {
        let agg = aggregate(&[AppIntegrationSet::new("a", ["Slack", "Klaviyo"])]);
        assert_eq!(agg.pair_count("Slack", "Klaviyo"), 1);
        assert_eq!(agg.pair_count("Klaviyo", "Slack"), 1);
    }

    #[test]
    fn pair_ties_break_on_concatenated_names() {
        let agg = aggregate(&[
            AppIntegrationSet::new("a", ["B", "C"]),
            AppIntegrationSet::new("b", ["A", "Z"]),
        ]);
        let ranked = agg.ranked_pairs();
        assert_eq!((ranked[0].first.as_str(), ranked[0].second.as_str()), ("A", "Z"));
        assert_eq!((ranked[1].first.as_str(), ranked[1].second.as_str()), ("B", "C"));
    }

    #[test]
    fn stack_threshold_never_drops_below_pairs() {
        let sets = [
            AppIntegrationSet::new("empty", Vec::<String>::new()),
            AppIntegrationSet::new("one", ["Slack"]),
            AppIntegrationSet::new("two", ["Slack", "Stripe"]),
        ];
        for min in [0, 1, 2] {
            let agg = aggregate_with(&sets, min);
            assert_eq!(agg.min_stack_size, 2);
            assert_eq!(agg.stacks.len(), 1);
            assert!(!agg.stacks.contains_key(&Vec::<String>::new()));
        }
    }

    #[test]
    fn cutoffs_drop_rare_pairs_and_stacks() {
        let sets = [
            AppIntegrationSet::new("a", ["A", "B", "C"]),
            AppIntegrationSet::new("b", ["A", "B", "C"]),
            AppIntegrationSet::new("c", ["A", "D", "E"]),
        ];
        let agg = aggregate(&sets);
        let pairs = agg.common_pairs(2);
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| p.apps == 2));
        assert_eq!(agg.common_stacks(2).len(), 1);
        assert_eq!(agg.common_stacks(2)[0].members, vec!["A", "B", "C"]);
        assert_eq!(agg.common_stacks(1).len(), 2);
        assert_eq!(agg.common_pairs(1).len(), agg.pairs.len());
    }
}
