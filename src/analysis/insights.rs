// src/analysis/insights.rs
//! Derived views over the aggregates: complexity tiers, rare integrations,
//! lift-based relationships, co-occurrence connectivity and per-category
//! rollups.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::aggregate::Aggregates;
use crate::config::consts::{
    CATEGORY_TOP_MEMBERS, CO_INTEGRATIONS_SHOWN, DEPENDENT_RATIO, LIFT_COMPLEMENTARY,
    LIFT_EXCLUSIVE, PRIMARY_RATIO,
};
use crate::pipeline::AppIntegrationSet;
use crate::taxonomy::Category;

// ---------------------------------------------------------------------------
// Complexity
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    None,
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 5] = [
        ComplexityTier::None,
        ComplexityTier::Simple,
        ComplexityTier::Moderate,
        ComplexityTier::Complex,
        ComplexityTier::VeryComplex,
    ];

    pub fn from_count(n: usize) -> Self {
        match n {
            0 => Self::None,
            1..=2 => Self::Simple,
            3..=5 => Self::Moderate,
            6..=8 => Self::Complex,
            _ => Self::VeryComplex,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No integrations",
            Self::Simple => "Simple (1-2)",
            Self::Moderate => "Moderate (3-5)",
            Self::Complex => "Complex (6-8)",
            Self::VeryComplex => "Very complex (9+)",
        }
    }
}

/// Apps per tier; every tier present, zero when empty.
pub fn complexity(aggregates: &Aggregates) -> BTreeMap<ComplexityTier, usize> {
    let mut out: BTreeMap<ComplexityTier, usize> =
        ComplexityTier::ALL.iter().map(|t| (*t, 0)).collect();
    for (&count, &apps) in &aggregates.density {
        *out.entry(ComplexityTier::from_count(count)).or_default() += apps;
    }
    out
}

// ---------------------------------------------------------------------------
// Rare integrations
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RareIntegration {
    pub name: String,
    pub apps: usize,
    pub app_labels: Vec<String>,
    /// Most frequent partners, count desc then name.
    pub co_integrations: Vec<(String, usize)>,
}

/// Integrations appearing in at most `threshold` apps, rarest first.
pub fn rare_integrations(
    app_sets: &[AppIntegrationSet],
    aggregates: &Aggregates,
    threshold: usize,
) -> Vec<RareIntegration> {
    let mut out: Vec<RareIntegration> = Vec::new();

    for (name, &apps) in &aggregates.frequency {
        if apps > threshold {
            continue;
        }
        let mut labels = Vec::new();
        let mut partners: BTreeMap<&str, usize> = BTreeMap::new();
        for app in app_sets.iter().filter(|a| a.integrations.contains(name)) {
            labels.push(app.label().to_string());
            for other in app.integrations.iter().filter(|o| *o != name) {
                *partners.entry(other.as_str()).or_default() += 1;
            }
        }
        let mut co: Vec<(String, usize)> =
            partners.into_iter().map(|(k, n)| (k.to_string(), n)).collect();
        co.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        co.truncate(CO_INTEGRATIONS_SHOWN);

        out.push(RareIntegration {
            name: name.clone(),
            apps,
            app_labels: labels,
            co_integrations: co,
        });
    }

    out.sort_by(|a, b| a.apps.cmp(&b.apps).then_with(|| a.name.cmp(&b.name)));
    out
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairLift {
    pub first: String,
    pub second: String,
    pub together: usize,
    pub lift: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandaloneRatio {
    pub name: String,
    pub alone: usize,
    pub apps: usize,
    pub ratio: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationships {
    /// lift > 2, highest first.
    pub complementary: Vec<PairLift>,
    /// lift < 0.5, lowest first.
    pub exclusive: Vec<PairLift>,
    /// Usually declared alone (ratio > 0.5).
    pub primary: Vec<StandaloneRatio>,
    /// Almost never alone (ratio < 0.1).
    pub dependent: Vec<StandaloneRatio>,
}

/// `together · N / (fa · fb)`; only pairs that co-occur at least once.
pub fn lift(together: usize, fa: usize, fb: usize, total_apps: usize) -> f64 {
    if fa == 0 || fb == 0 {
        return 0.0;
    }
    (together * total_apps) as f64 / (fa * fb) as f64
}

pub fn relationships(app_sets: &[AppIntegrationSet], aggregates: &Aggregates) -> Relationships {
    let mut rel = Relationships::default();
    let n = aggregates.total_apps;

    for ((a, b), &together) in &aggregates.pairs {
        let l = lift(together, aggregates.frequency_of(a), aggregates.frequency_of(b), n);
        let entry = PairLift { first: a.clone(), second: b.clone(), together, lift: l };
        if l > LIFT_COMPLEMENTARY {
            rel.complementary.push(entry);
        } else if l < LIFT_EXCLUSIVE {
            rel.exclusive.push(entry);
        }
    }
    rel.complementary.sort_by(|x, y| y.lift.total_cmp(&x.lift).then_with(|| x.first.cmp(&y.first)));
    rel.exclusive.sort_by(|x, y| x.lift.total_cmp(&y.lift).then_with(|| x.first.cmp(&y.first)));

    let mut alone: BTreeMap<&str, usize> = BTreeMap::new();
    for app in app_sets.iter().filter(|a| a.len() == 1) {
        if let Some(only) = app.integrations.iter().next() {
            *alone.entry(only.as_str()).or_default() += 1;
        }
    }

    for (name, &apps) in &aggregates.frequency {
        let alone_n = alone.get(name.as_str()).copied().unwrap_or(0);
        let ratio = alone_n as f64 / apps as f64;
        let entry = StandaloneRatio { name: name.clone(), alone: alone_n, apps, ratio };
        if ratio > PRIMARY_RATIO {
            rel.primary.push(entry);
        } else if ratio < DEPENDENT_RATIO {
            rel.dependent.push(entry);
        }
    }
    rel.primary.sort_by(|x, y| y.ratio.total_cmp(&x.ratio).then_with(|| y.apps.cmp(&x.apps)));
    rel.dependent.sort_by(|x, y| y.apps.cmp(&x.apps).then_with(|| x.name.cmp(&y.name)));

    logd!(
        "Insights: complementary={} exclusive={} primary={} dependent={}",
        rel.complementary.len(),
        rel.exclusive.len(),
        rel.primary.len(),
        rel.dependent.len()
    );
    rel
}

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

/// Degree of one integration in the co-occurrence network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connectivity {
    pub name: String,
    /// Distinct integrations it shares at least one app with.
    pub partners: usize,
    /// `partners / (unique integrations - 1)`
    pub centrality: f64,
    /// Sum of its pair counts.
    pub co_mentions: usize,
}

/// Most connected first. Integrations that never co-occur are left out.
pub fn connectivity(aggregates: &Aggregates) -> Vec<Connectivity> {
    let mut degree: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for ((a, b), &together) in &aggregates.pairs {
        for name in [a, b] {
            let d = degree.entry(name.as_str()).or_default();
            d.0 += 1;
            d.1 += together;
        }
    }

    let others = aggregates.frequency.len().saturating_sub(1);
    let mut out: Vec<Connectivity> = degree
        .into_iter()
        .map(|(name, (partners, co_mentions))| Connectivity {
            name: name.to_string(),
            partners,
            centrality: if others == 0 { 0.0 } else { partners as f64 / others as f64 },
            co_mentions,
        })
        .collect();
    out.sort_by(|a, b| {
        b.partners
            .cmp(&a.partners)
            .then_with(|| b.co_mentions.cmp(&a.co_mentions))
            .then_with(|| a.name.cmp(&b.name))
    });
    out
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: Category,
    /// Apps with at least one member of the category.
    pub apps: usize,
    pub mentions: usize,
    pub unique: usize,
    pub app_share: f64,
    pub top: Vec<(String, usize)>,
}

/// One row per category that has at least one member, most apps first.
pub fn category_stats(
    app_sets: &[AppIntegrationSet],
    categories: &BTreeMap<String, Category>,
    aggregates: &Aggregates,
) -> Vec<CategoryStats> {
    let cat_of = |name: &str| categories.get(name).copied().unwrap_or(Category::Uncategorized);

    let mut out = Vec::new();
    for cat in Category::ALL {
        let members: BTreeSet<&str> = aggregates
            .frequency
            .keys()
            .map(String::as_str)
            .filter(|n| cat_of(n) == cat)
            .collect();
        if members.is_empty() {
            continue;
        }

        let apps = app_sets
            .iter()
            .filter(|a| a.integrations.iter().any(|i| members.contains(i.as_str())))
            .count();
        let mentions: usize = members.iter().map(|m| aggregates.frequency_of(m)).sum();

        let mut top: Vec<(String, usize)> =
            members.iter().map(|m| (m.to_string(), aggregates.frequency_of(m))).collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top.truncate(CATEGORY_TOP_MEMBERS);

        out.push(CategoryStats {
            category: cat,
            apps,
            mentions,
            unique: members.len(),
            app_share: pct!(apps, aggregates.total_apps),
            top,
        });
    }
    out.sort_by(|a, b| b.apps.cmp(&a.apps).then_with(|| a.category.cmp(&b.category)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate::aggregate;

    #[test]
    fn tiers_cover_boundaries() {
        assert_eq!(ComplexityTier::from_count(0), ComplexityTier::None);
        assert_eq!(ComplexityTier::from_count(2), ComplexityTier::Simple);
        assert_eq!(ComplexityTier::from_count(3), ComplexityTier::Moderate);
        assert_eq!(ComplexityTier::from_count(8), ComplexityTier::Complex);
        assert_eq!(ComplexityTier::from_count(9), ComplexityTier::VeryComplex);
    }

    #[test]
    fn lift_of_independent_pair_is_one() {
        // 4 apps, A in 2, B in 2, both in 1.
        assert!((lift(1, 2, 2, 4) - 1.0).abs() < 1e-9);
        assert_eq!(lift(1, 0, 2, 4), 0.0);
    }

    #[test]
    fn standalone_integration_is_primary() {
        let sets = vec![
            AppIntegrationSet::new("1", ["Stripe"]),
            AppIntegrationSet::new("2", ["Stripe"]),
            AppIntegrationSet::new("3", ["Stripe", "Slack"]),
        ];
        let agg = aggregate(&sets);
        let rel = relationships(&sets, &agg);
        assert!(rel.primary.iter().any(|r| r.name == "Stripe"));
        assert!(rel.dependent.iter().any(|r| r.name == "Slack"));
    }

    #[test]
    fn rare_lists_partners() {
        let sets = vec![
            AppIntegrationSet::new("1", ["Niche", "Slack"]),
            AppIntegrationSet::new("2", ["Slack"]),
            AppIntegrationSet::new("3", ["Slack"]),
        ];
        let agg = aggregate(&sets);
        let rare = rare_integrations(&sets, &agg, 2);
        assert_eq!(rare.len(), 1);
        assert_eq!(rare[0].name, "Niche");
        assert_eq!(rare[0].co_integrations, vec![(s!("Slack"), 1)]);
    }

    #[test]
    fn rare_threshold_is_inclusive() {
        let sets = vec![
            AppIntegrationSet::new("1", ["Pair", "Common"]),
            AppIntegrationSet::new("2", ["Pair", "Common"]),
            AppIntegrationSet::new("3", ["Common"]),
        ];
        let agg = aggregate(&sets);
        let names: Vec<String> = rare_integrations(&sets, &agg, 2).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec![s!("Pair")]);
        assert!(rare_integrations(&sets, &agg, 1).is_empty());
    }

    #[test]
    fn low_lift_pair_is_exclusive() {
        // 10 apps, A in 5, B in 5, together in 1: lift 0.4
        let mut sets = vec![AppIntegrationSet::new("0", ["A", "B"])];
        for i in 1..5 {
            sets.push(AppIntegrationSet::new(i.to_string(), ["A"]));
        }
        for i in 5..9 {
            sets.push(AppIntegrationSet::new(i.to_string(), ["B"]));
        }
        sets.push(AppIntegrationSet::new("9", Vec::<String>::new()));

        let agg = aggregate(&sets);
        let rel = relationships(&sets, &agg);
        assert_eq!(rel.exclusive.len(), 1);
        let p = &rel.exclusive[0];
        assert_eq!((p.first.as_str(), p.second.as_str(), p.together), ("A", "B", 1));
        assert!((p.lift - 0.4).abs() < 1e-9);
        assert!(rel.complementary.is_empty());
    }

    #[test]
    fn category_rollup_counts_apps_mentions_and_members() {
        let sets = vec![
            AppIntegrationSet::new("1", ["Stripe", "PayPal", "Slack"]),
            AppIntegrationSet::new("2", ["Stripe"]),
            AppIntegrationSet::new("3", ["Slack"]),
            AppIntegrationSet::new("4", Vec::<String>::new()),
        ];
        let categories: BTreeMap<String, Category> = [
            (s!("Stripe"), Category::Payment),
            (s!("PayPal"), Category::Payment),
            (s!("Slack"), Category::Productivity),
        ]
        .into_iter()
        .collect();
        let agg = aggregate(&sets);
        let stats = category_stats(&sets, &categories, &agg);

        assert_eq!(stats.len(), 2);
        let pay = &stats[0];
        assert_eq!(pay.category, Category::Payment);
        assert_eq!((pay.apps, pay.mentions, pay.unique), (2, 3, 2));
        assert_eq!(pay.top, vec![(s!("Stripe"), 2), (s!("PayPal"), 1)]);
        assert!((pay.app_share - 50.0).abs() < 1e-9);

        let prod = &stats[1];
        assert_eq!(prod.category, Category::Productivity);
        assert_eq!((prod.apps, prod.mentions, prod.unique), (2, 2, 1));
        assert_eq!(prod.top, vec![(s!("Slack"), 2)]);
    }

    #[test]
    fn connectivity_ranks_by_distinct_partners() {
        let sets = vec![
            AppIntegrationSet::new("a", ["A", "B", "C"]),
            AppIntegrationSet::new("b", ["A", "B"]),
            AppIntegrationSet::new("c", ["D"]),
        ];
        let conn = connectivity(&aggregate(&sets));
        let order: Vec<(&str, usize, usize)> =
            conn.iter().map(|c| (c.name.as_str(), c.partners, c.co_mentions)).collect();
        assert_eq!(order, vec![("A", 2, 3), ("B", 2, 3), ("C", 2, 2)]);
        assert!((conn[0].centrality - 2.0 / 3.0).abs() < 1e-9);
    }
}
