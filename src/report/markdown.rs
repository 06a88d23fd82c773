// src/report/markdown.rs
use crate::analysis::insights::ComplexityTier;
use crate::analysis::Analysis;
use crate::config::consts::{TOP_CONNECTED, TOP_RELATIONSHIPS, TOP_STACKS};

/// Full human-readable report. `top_n` caps the frequency and pair lists.
pub fn render_markdown(a: &Analysis, top_n: usize) -> String {
    let mut r: Vec<String> = Vec::new();
    let stats = &a.standardized.stats;
    let agg = &a.aggregates;
    let total = a.total_apps();

    r.push(s!("# Integration Pattern Analysis"));
    r.push(s!());

    // Overview
    r.push(s!("## Overview Statistics"));
    r.push(s!());
    r.push(format!("- Total apps analyzed: {}", total));
    r.push(format!(
        "- Apps with integrations: {} ({:.1}%)",
        stats.apps_with_integrations,
        pct!(stats.apps_with_integrations, total)
    ));
    r.push(format!("- Empty integration fields: {}", stats.empty_fields));
    r.push(format!("- Raw mentions: {}", stats.raw_mentions));
    r.push(format!("- Rejected mentions: {}", stats.rejected_total()));
    for (reason, n) in &stats.rejected {
        r.push(format!("  - {:?}: {}", reason, n));
    }
    r.push(format!("- Canonical mentions: {}", stats.total_mentions));
    r.push(format!("- Unique integrations: {}", stats.unique_integrations));
    r.push(format!("- Uncategorized integrations: {}", stats.uncategorized));
    r.push(s!());

    // Frequency
    r.push(s!("## Top Integrations"));
    r.push(s!());
    if agg.frequency.is_empty() {
        r.push(s!("_No integrations found._"));
    }
    for (i, e) in agg.ranked_frequency().iter().take(top_n).enumerate() {
        r.push(format!(
            "{}. {} ({}): {} apps ({:.1}%)",
            i + 1,
            e.integration,
            a.standardized.category_of(&e.integration).label(),
            e.apps,
            pct!(e.apps, total)
        ));
    }
    r.push(s!());

    // Pairs
    r.push(s!("## Common Integration Pairs"));
    r.push(s!());
    r.push(format!(
        "Most frequently co-occurring integration pairs (seen in {} or more apps):",
        a.min_pair_count
    ));
    r.push(s!());
    for p in a.reported_pairs().iter().take(top_n) {
        r.push(format!("- {} + {}: {} apps", p.first, p.second, p.apps));
    }
    r.push(s!());

    // Stacks
    r.push(s!("## Common Integration Stacks"));
    r.push(s!());
    r.push(format!(
        "Most common exact combinations of {} or more integrations (seen in {} or more apps):",
        agg.min_stack_size, a.min_stack_count
    ));
    r.push(s!());
    for st in a.reported_stacks().iter().take(TOP_STACKS) {
        r.push(format!("- Stack of {} integrations ({} apps):", st.members.len(), st.apps));
        for m in &st.members {
            r.push(format!("  - {}", m));
        }
    }
    r.push(s!());

    // Connectivity
    r.push(s!("## Most Connected Integrations"));
    r.push(s!());
    r.push(s!("Distinct integrations each one shares an app with:"));
    r.push(s!());
    for c in a.connectivity.iter().take(TOP_CONNECTED) {
        r.push(format!(
            "- {}: {} partners (centrality {:.2}, {} shared apps)",
            c.name, c.partners, c.centrality, c.co_mentions
        ));
    }
    r.push(s!());

    // Density
    r.push(s!("## Integration Density"));
    r.push(s!());
    r.push(s!("Distribution of number of integrations per app:"));
    r.push(s!());
    for d in agg.density_entries() {
        r.push(format!(
            "- {} integration(s): {} apps ({:.1}%)",
            d.integrations,
            d.apps,
            pct!(d.apps, total)
        ));
    }
    r.push(s!());

    // Categories
    r.push(s!("## Integration Categories"));
    r.push(s!());
    for c in &a.categories {
        r.push(format!("### {}", c.category.label()));
        r.push(s!());
        r.push(format!("- Apps using: {} ({:.1}%)", c.apps, c.app_share));
        r.push(format!("- Total mentions: {}", c.mentions));
        r.push(format!("- Unique integrations: {}", c.unique));
        let top: Vec<String> = c.top.iter().map(|(n, k)| format!("{n} ({k})")).collect();
        r.push(format!("- Top: {}", top.join(", ")));
        r.push(s!());
    }

    // Complexity
    r.push(s!("## App Complexity"));
    r.push(s!());
    for tier in ComplexityTier::ALL {
        let n = a.complexity.get(&tier).copied().unwrap_or(0);
        r.push(format!("- {}: {} apps ({:.1}%)", tier.label(), n, pct!(n, total)));
    }
    r.push(s!());

    // Relationships
    let rel = &a.relationships;
    r.push(s!("## Integration Relationships"));
    r.push(s!());
    r.push(s!("### Complementary (often used together)"));
    r.push(s!());
    for p in rel.complementary.iter().take(TOP_RELATIONSHIPS) {
        r.push(format!("- {} + {} (lift {:.2}, {} apps)", p.first, p.second, p.lift, p.together));
    }
    r.push(s!());
    r.push(s!("### Rarely combined"));
    r.push(s!());
    for p in rel.exclusive.iter().take(TOP_RELATIONSHIPS) {
        r.push(format!("- {} vs {} (lift {:.2})", p.first, p.second, p.lift));
    }
    r.push(s!());
    r.push(s!("### Primary (usually the only integration)"));
    r.push(s!());
    for x in rel.primary.iter().take(TOP_RELATIONSHIPS) {
        r.push(format!("- {}: alone in {} of {} apps", x.name, x.alone, x.apps));
    }
    r.push(s!());
    r.push(s!("### Dependent (almost always combined)"));
    r.push(s!());
    for x in rel.dependent.iter().take(TOP_RELATIONSHIPS) {
        r.push(format!("- {}: {} apps, alone in {}", x.name, x.apps, x.alone));
    }
    r.push(s!());

    // Rare
    r.push(s!("## Less Common Integrations"));
    r.push(s!());
    for rare in &a.rare {
        r.push(format!("### {}", rare.name));
        r.push(s!());
        r.push(format!("- Frequency: {} apps", rare.apps));
        r.push(format!("- Found in: {}", rare.app_labels.join(", ")));
        if !rare.co_integrations.is_empty() {
            let co: Vec<&str> = rare.co_integrations.iter().map(|(n, _)| n.as_str()).collect();
            r.push(format!("- Typically appears with: {}", co.join(", ")));
        }
        r.push(s!());
    }

    r.join("\n")
}
