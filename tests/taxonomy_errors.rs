// tests/taxonomy_errors.rs
use std::path::Path;

use app_integrations::pipeline::{categorize, normalize, validate};
use app_integrations::taxonomy::{Category, Taxonomy, TaxonomyError};

#[test]
fn unknown_category_is_rejected() {
    let err = Taxonomy::from_toml("[categories]\nsnacks = [\"Chips\"]\n").unwrap_err();
    assert!(matches!(err, TaxonomyError::UnknownCategory(ref k) if k == "snacks"));
}

#[test]
fn name_in_two_categories_is_rejected() {
    let err = Taxonomy::from_toml(
        "[categories]\nmarketing = [\"Slack\"]\nproductivity = [\"slack\"]\n",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TaxonomyError::DuplicateCategory { first: Category::Marketing, second: Category::Productivity, .. }
    ));
}

#[test]
fn alias_remapping_a_canonical_name_is_rejected() {
    let err = Taxonomy::from_toml(
        "[aliases]\n\"slack\" = \"Microsoft Teams\"\n[categories]\nproductivity = [\"Slack\", \"Microsoft Teams\"]\n",
    )
    .unwrap_err();
    assert!(matches!(err, TaxonomyError::ConflictingAlias { ref canonical, .. } if canonical == "Slack"));
}

#[test]
fn empty_alias_target_is_rejected() {
    let err = Taxonomy::from_toml("[aliases]\n\"x\" = \"   \"\n").unwrap_err();
    assert!(matches!(err, TaxonomyError::EmptyAlias(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Taxonomy::from_toml("aliases = [").unwrap_err();
    assert!(matches!(err, TaxonomyError::Parse(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = Taxonomy::load(Path::new("definitely/not/here.toml")).unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.toml"));
}

#[test]
fn empty_document_uses_default_thresholds() {
    let tax = Taxonomy::from_toml("").unwrap();
    assert_eq!(tax.min_chars(), 2);
    assert_eq!(tax.max_words(), 5);
    assert_eq!(normalize("ga4", &tax), "Ga4");
    assert_eq!(categorize("Ga4", &tax), Category::Uncategorized);
}

#[test]
fn merge_layers_user_tables_over_builtin() {
    let base = Taxonomy::builtin().unwrap();
    let merged = base
        .merge_toml(
            "max_words = 2\ngeneric_terms = [\"shopify\"]\n\
             [aliases]\n\"gorgias helpdesk\" = \"Gorgias\"\n\
             [categories]\nmarketing = [\"Slack\"]\n",
        )
        .unwrap();

    assert_eq!(merged.max_words(), 2);
    assert!(!validate("one two three", &merged));
    assert!(!validate("Shopify", &merged));
    assert_eq!(normalize("Gorgias Helpdesk", &merged), "Gorgias");
    // Re-listed names move to the new category
    assert_eq!(categorize("Slack", &merged), Category::Marketing);
    // Untouched entries survive
    assert_eq!(normalize("ga4", &merged), "Google Analytics");
    assert_eq!(categorize("Stripe", &merged), Category::Payment);
}

#[test]
fn alias_keys_differing_only_in_case_must_agree() {
    let err = Taxonomy::from_toml(
        "[aliases]\n\"FB\" = \"Facebook\"\n\"fb\" = \"Facebook Pixel\"\n",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TaxonomyError::DuplicateAlias { ref alias, ref first, ref second }
            if alias == "fb" && first == "Facebook" && second == "Facebook Pixel"
    ));

    let same = Taxonomy::from_toml("[aliases]\n\"FB\" = \"Facebook\"\n\"fb\" = \"Facebook\"\n").unwrap();
    assert_eq!(same.alias("Fb"), Some("Facebook"));
}
