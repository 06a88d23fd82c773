// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use app_integrations::config::options::{AppOptions, ExportFormat, ReportKind};
use app_integrations::csv::parse_rows;
use app_integrations::progress::NullProgress;
use app_integrations::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("app_integrations_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const SAMPLE: &str = "app_id,app_name,integrations\n\
A,Alpha,\"Checkout, Klaviyo\"\n\
B,Beta,Checkout\n\
C,Gamma,\"Checkout, Klaviyo, Shopify Flow\"\n\
D,Delta,\"API, ga4\"\n\
E,Empty,\n";

fn options_for(dir: &PathBuf) -> AppOptions {
    let input = dir.join("apps.csv");
    fs::write(&input, SAMPLE).unwrap();

    let mut opts = AppOptions::default();
    opts.analysis.input = input;
    opts.export.set_out_dir(dir.join("out").to_str().unwrap());
    opts
}

#[test]
fn full_run_writes_tables_report_and_charts() {
    let dir = tmp_dir("full");
    let mut opts = options_for(&dir);
    opts.export.json = true;

    let summary = runner::run(&opts, &mut NullProgress).unwrap();

    // 6 tables + report + json + 3 bar charts + heatmap
    assert_eq!(summary.files_written.len(), 12);
    for p in &summary.files_written {
        assert!(p.exists(), "missing {}", p.display());
    }

    let freq = fs::read_to_string(opts.export.table_path(ReportKind::Frequency)).unwrap();
    let rows = parse_rows(&freq, ',');
    assert_eq!(rows[0], vec!["Rank", "Integration", "Category", "Apps", "Share %"]);
    assert_eq!(rows[1][1], "Checkout");
    assert_eq!(rows[1][3], "3");
    assert!(!freq.contains("Api"));

    let density = fs::read_to_string(opts.export.table_path(ReportKind::Density)).unwrap();
    let rows = parse_rows(&density, ',');
    // 0 (Empty), 1 (Beta + Delta), 2 (Alpha), 3 (Gamma)
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1], vec!["0", "1", "20.0"]);

    let md = fs::read_to_string(opts.export.report_path()).unwrap();
    assert!(md.contains("- Total apps analyzed: 5"));
    assert!(md.contains("- Checkout + Klaviyo: 2 apps"));
    assert!(md.contains("- Stack of 3 integrations (1 apps):"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(opts.export.json_path()).unwrap()).unwrap();
    assert_eq!(json["stats"]["total_apps"], 5);
    assert_eq!(json["categories"]["Google Analytics"], "marketing");

    for chart in ["frequency.png", "cooccurrence.png"] {
        let png = fs::read(opts.export.charts_dir().join(chart)).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }
    assert_eq!(json["connectivity"][0]["name"], "Checkout");
}

#[test]
fn tsv_without_headers_or_extras() {
    let dir = tmp_dir("tsv");
    let mut opts = options_for(&dir);
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.markdown = false;
    opts.export.charts = false;

    let summary = runner::run(&opts, &mut NullProgress).unwrap();
    assert_eq!(summary.files_written.len(), ReportKind::ALL.len());

    let pairs_path = opts.export.table_path(ReportKind::Pairs);
    assert!(pairs_path.to_string_lossy().ends_with("pairs.tsv"));
    let rows = parse_rows(&fs::read_to_string(pairs_path).unwrap(), '\t');
    assert_eq!(rows[0][..3], [s("Checkout"), s("Klaviyo"), s("2")]);
    assert!(!opts.export.report_path().exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = tmp_dir("missing");
    let mut opts = options_for(&dir);
    opts.analysis.input = dir.join("nope.csv");
    assert!(runner::run(&opts, &mut NullProgress).is_err());
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn layered_taxonomy_file_extends_builtin() {
    let dir = tmp_dir("layered");
    let extra = dir.join("extra.toml");
    fs::write(&extra, "generic_terms = [\"klaviyo\"]\n[aliases]\n\"acme sync\" = \"Acme\"\n").unwrap();

    let mut opts = options_for(&dir);
    opts.analysis.taxonomy_add = Some(extra);
    let tax = runner::load_taxonomy(&opts.analysis).unwrap();
    assert_eq!(tax.alias("ACME  sync"), Some("Acme"));
    // Builtin aliases survive the layer
    assert_eq!(tax.alias("ga4"), Some("Google Analytics"));

    let analysis = runner::analyze_input(&opts.analysis, &mut NullProgress).unwrap();
    assert_eq!(analysis.aggregates.frequency_of("Klaviyo"), 0);
    assert_eq!(analysis.aggregates.frequency_of("Shopify Flow"), 1);

    opts.analysis.taxonomy_add = Some(dir.join("missing.toml"));
    assert!(runner::load_taxonomy(&opts.analysis).is_err());
}
