// src/report/tables.rs
//! Each exportable table as headers + string rows.
//!
//! An optional category filter narrows category-aware tables to rows that
//! touch at least one selected category; the exported files always use the
//! unfiltered form.

use std::collections::BTreeSet;

use crate::analysis::{insights, Analysis};
use crate::config::options::ReportKind;
use crate::store::DataSet;
use crate::taxonomy::Category;

/// Column names, identical with or without data.
pub fn table_headers(kind: ReportKind) -> &'static [&'static str] {
    match kind {
        ReportKind::Frequency => &["Rank", "Integration", "Category", "Apps", "Share %"],
        ReportKind::Pairs => &["Integration A", "Integration B", "Apps", "Lift"],
        ReportKind::Stacks => &["Size", "Members", "Apps"],
        ReportKind::Density => &["Integrations", "Apps", "Share %"],
        ReportKind::Categories => &["Category", "Apps", "Share %", "Mentions", "Unique", "Top integrations"],
        ReportKind::Apps => &["App ID", "Name", "Integrations", "List"],
    }
}

pub fn table(analysis: &Analysis, kind: ReportKind) -> DataSet {
    table_filtered(analysis, kind, None)
}

pub fn table_filtered(
    analysis: &Analysis,
    kind: ReportKind,
    filter: Option<&BTreeSet<Category>>,
) -> DataSet {
    let sets = &analysis.standardized;
    let keep = |name: &str| filter.is_none_or(|f| f.contains(&sets.category_of(name)));

    match kind {
        ReportKind::Frequency => frequency(analysis, &keep),
        ReportKind::Pairs => pairs(analysis, &keep),
        ReportKind::Stacks => stacks(analysis, &keep),
        ReportKind::Density => density(analysis),
        ReportKind::Categories => categories(analysis, filter),
        ReportKind::Apps => apps(analysis, &keep),
    }
}

fn fmt_pct(v: f64) -> String {
    format!("{v:.1}")
}

fn frequency(a: &Analysis, keep: &dyn Fn(&str) -> bool) -> DataSet {
    let total = a.total_apps();
    let rows = a
        .aggregates
        .ranked_frequency()
        .into_iter()
        .enumerate()
        .filter(|(_, e)| keep(&e.integration))
        .map(|(i, e)| {
            vec![
                (i + 1).to_string(),
                e.integration.clone(),
                a.standardized.category_of(&e.integration).key().to_string(),
                e.apps.to_string(),
                fmt_pct(pct!(e.apps, total)),
            ]
        })
        .collect();
    DataSet::new(table_headers(ReportKind::Frequency), rows)
}

fn pairs(a: &Analysis, keep: &dyn Fn(&str) -> bool) -> DataSet {
    let agg = &a.aggregates;
    let rows = a
        .reported_pairs()
        .into_iter()
        .filter(|p| keep(&p.first) || keep(&p.second))
        .map(|p| {
            let lift = insights::lift(
                p.apps,
                agg.frequency_of(&p.first),
                agg.frequency_of(&p.second),
                agg.total_apps,
            );
            vec![p.first, p.second, p.apps.to_string(), format!("{lift:.2}")]
        })
        .collect();
    DataSet::new(table_headers(ReportKind::Pairs), rows)
}

fn stacks(a: &Analysis, keep: &dyn Fn(&str) -> bool) -> DataSet {
    let rows = a
        .reported_stacks()
        .into_iter()
        .filter(|s| s.members.iter().any(|m| keep(m)))
        .map(|s| vec![s.members.len().to_string(), s.members.join(" + "), s.apps.to_string()])
        .collect();
    DataSet::new(table_headers(ReportKind::Stacks), rows)
}

fn density(a: &Analysis) -> DataSet {
    let total = a.total_apps();
    let rows = a
        .aggregates
        .density_entries()
        .into_iter()
        .map(|d| vec![d.integrations.to_string(), d.apps.to_string(), fmt_pct(pct!(d.apps, total))])
        .collect();
    DataSet::new(table_headers(ReportKind::Density), rows)
}

fn categories(a: &Analysis, filter: Option<&BTreeSet<Category>>) -> DataSet {
    let rows = a
        .categories
        .iter()
        .filter(|c| filter.is_none_or(|f| f.contains(&c.category)))
        .map(|c| {
            let top: Vec<String> = c.top.iter().map(|(n, k)| format!("{n} ({k})")).collect();
            vec![
                c.category.key().to_string(),
                c.apps.to_string(),
                fmt_pct(c.app_share),
                c.mentions.to_string(),
                c.unique.to_string(),
                top.join("; "),
            ]
        })
        .collect();
    DataSet::new(table_headers(ReportKind::Categories), rows)
}

fn apps(a: &Analysis, keep: &dyn Fn(&str) -> bool) -> DataSet {
    let rows = a
        .standardized
        .apps
        .iter()
        .filter(|app| app.is_empty() || app.integrations.iter().any(|i| keep(i)))
        .map(|app| {
            let list: Vec<&str> = app.integrations.iter().map(String::as_str).collect();
            vec![
                app.app_id.clone(),
                app.app_name.clone().unwrap_or_default(),
                app.len().to_string(),
                list.join("; "),
            ]
        })
        .collect();
    DataSet::new(table_headers(ReportKind::Apps), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::AnalysisOptions;
    use crate::pipeline::{AppIntegrationSet, Standardized};

    fn sample() -> Analysis {
        let mut sets = Standardized::default();
        sets.apps = vec![
            AppIntegrationSet::new("a", ["Klaviyo", "Stripe"]),
            AppIntegrationSet::new("b", ["Stripe"]),
        ];
        sets.categories.insert(s!("Klaviyo"), Category::Marketing);
        sets.categories.insert(s!("Stripe"), Category::Payment);
        Analysis::from_standardized(sets, &AnalysisOptions::default())
    }

    #[test]
    fn frequency_rows_are_ranked() {
        let t = table(&sample(), ReportKind::Frequency);
        assert_eq!(t.rows[0][1], "Stripe");
        assert_eq!(t.rows[0][3], "2");
        assert_eq!(t.rows[0][4], "100.0");
    }

    #[test]
    fn filter_hides_unselected_categories() {
        let only_payment: BTreeSet<Category> = [Category::Payment].into_iter().collect();
        let t = table_filtered(&sample(), ReportKind::Frequency, Some(&only_payment));
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0][1], "Stripe");
    }

    #[test]
    fn pair_cutoff_applies_to_exported_rows() {
        let mut sets = Standardized::default();
        sets.apps = vec![
            AppIntegrationSet::new("a", ["Klaviyo", "Stripe"]),
            AppIntegrationSet::new("b", ["Klaviyo", "Stripe"]),
            AppIntegrationSet::new("c", ["Slack", "Stripe"]),
        ];
        let opts = AnalysisOptions { min_pair_count: 2, ..AnalysisOptions::default() };
        let t = table(&Analysis::from_standardized(sets, &opts), ReportKind::Pairs);
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0][..3], [s!("Klaviyo"), s!("Stripe"), s!("2")]);
    }
}
