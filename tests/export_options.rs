// tests/export_options.rs
use std::path::PathBuf;

use app_integrations::cli::{parse_args, Command};
use app_integrations::config::options::{ExportFormat, ExportOptions, ReportKind};

#[test]
fn defaults_point_at_out_dir() {
    let e = ExportOptions::default();
    assert_eq!(e.out_dir(), PathBuf::from("out"));
    assert_eq!(e.table_path(ReportKind::Stacks), PathBuf::from("out").join("stacks.csv"));
    assert_eq!(e.report_path(), PathBuf::from("out").join("report.md"));
    assert_eq!(e.charts_dir(), PathBuf::from("out").join("charts"));
}

#[test]
fn format_controls_extension() {
    let mut e = ExportOptions::default();
    e.format = ExportFormat::Tsv;
    assert!(e.table_path(ReportKind::Apps).to_string_lossy().ends_with("apps.tsv"));
    assert_eq!(e.delim(), '\t');
}

#[test]
fn pasted_file_path_keeps_its_folder() {
    let mut e = ExportOptions::default();
    e.set_out_dir("results/run1/report.md");
    assert_eq!(e.out_dir(), PathBuf::from("results/run1"));
    e.set_out_dir("  results/run2  ");
    assert_eq!(e.out_dir(), PathBuf::from("results/run2"));
    e.set_out_dir("");
    assert_eq!(e.out_dir(), PathBuf::from("out"));
}

#[test]
fn cli_print_taxonomy_and_help() {
    let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert!(matches!(parse_args(args(&["--print-taxonomy"])).unwrap(), Command::PrintTaxonomy(_)));
    assert!(matches!(parse_args(args(&["-h"])).unwrap(), Command::Help));
    let Command::Run(o) = parse_args(args(&["--out", "x", "--no-charts", "--rare", "0"])).unwrap() else {
        panic!("expected run");
    };
    assert_eq!(o.export.out_dir(), PathBuf::from("x"));
    assert!(!o.export.charts);
    assert_eq!(o.analysis.rare_threshold, 0);
}
