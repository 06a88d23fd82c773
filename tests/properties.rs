// tests/properties.rs
use proptest::prelude::*;

use app_integrations::analysis::aggregate;
use app_integrations::pipeline::{categorize, normalize, standardize, AppIntegrationSet};
use app_integrations::records::RawRecord;
use app_integrations::taxonomy::{Category, Taxonomy};

const NAMES: &[&str] = &[
    "Slack", "Stripe", "Klaviyo", "UPS", "Checkout", "Zapier", "Amazon", "PayPal",
    "Shopify Flow", "Google Analytics",
];

fn raw_mention() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .&'-]{0,24}",
        "[ \t]{0,3}(ga4|fb pixel|META PIXEL|shopify  flow|Amazon|api|é|straße)[ \t]{0,3}",
    ]
}

fn app_sets() -> impl Strategy<Value = Vec<AppIntegrationSet>> {
    prop::collection::vec(prop::sample::subsequence(NAMES, 0..=NAMES.len()), 0..40).prop_map(|apps| {
        apps.into_iter()
            .enumerate()
            .map(|(i, names)| AppIntegrationSet::new(i.to_string(), names))
            .collect()
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in raw_mention()) {
        let tax = Taxonomy::builtin().unwrap();
        let once = normalize(&raw, &tax);
        prop_assert_eq!(normalize(&once, &tax), once);
    }

    #[test]
    fn categorize_is_total(raw in raw_mention()) {
        let tax = Taxonomy::builtin().unwrap();
        let cat = categorize(&normalize(&raw, &tax), &tax);
        prop_assert!(Category::ALL.contains(&cat));
    }

    #[test]
    fn frequency_never_exceeds_app_count(sets in app_sets()) {
        let agg = aggregate(&sets);
        for (_, &n) in &agg.frequency {
            prop_assert!(n <= sets.len());
        }
    }

    #[test]
    fn pair_never_exceeds_either_frequency(sets in app_sets()) {
        let agg = aggregate(&sets);
        for ((a, b), &n) in &agg.pairs {
            prop_assert!(a < b);
            prop_assert!(n <= agg.frequency_of(a).min(agg.frequency_of(b)));
        }
    }

    #[test]
    fn density_sums_to_total_mentions(sets in app_sets()) {
        let agg = aggregate(&sets);
        let mentions: usize = sets.iter().map(|s| s.len()).sum();
        prop_assert_eq!(agg.total_mentions(), mentions);
        let apps: usize = agg.density.values().sum();
        prop_assert_eq!(apps, sets.len());
    }

    #[test]
    fn each_app_is_in_at_most_one_stack(sets in app_sets()) {
        let agg = aggregate(&sets);
        let stacked: usize = agg.stacks.values().sum();
        prop_assert_eq!(stacked, sets.iter().filter(|s| s.len() >= 3).count());
    }

    #[test]
    fn standardize_output_is_normalized(raws in prop::collection::vec(raw_mention(), 0..12)) {
        let tax = Taxonomy::builtin().unwrap();
        let refs: Vec<&str> = raws.iter().map(String::as_str).collect();
        let out = standardize(&[RawRecord::new("a", &refs)], &tax);
        for name in &out.apps[0].integrations {
            prop_assert_eq!(&normalize(name, &tax), name);
        }
    }
}
