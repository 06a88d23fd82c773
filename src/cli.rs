// src/cli.rs
use std::{env, path::Path, path::PathBuf};

use crate::config::consts::MIN_STACK_FLOOR;
use crate::config::options::{AppOptions, ExportFormat};
use crate::file::normalize_separators;
use crate::progress::Progress;

/// What the command line asked for.
pub enum Command {
    Run(AppOptions),
    PrintTaxonomy(AppOptions),
    Help,
}

/// Prints stage/file events to stderr so stdout stays clean for piping.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn file_written(&mut self, path: &Path) {
        eprintln!("  wrote {}", path.display());
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
        }
        Command::PrintTaxonomy(opts) => {
            let tax = crate::runner::load_taxonomy(&opts.analysis)?;
            print!("{}", tax.to_toml()?);
        }
        Command::Run(opts) => {
            logf!("CLI: run input={} out={}", opts.analysis.input.display(), opts.export.out_dir().display());
            let summary = crate::runner::run(&opts, &mut CliProgress)?;
            let stats = &summary.analysis.standardized.stats;
            println!(
                "{} apps, {} with integrations, {} unique integrations, {} files written to {}",
                stats.total_apps,
                stats.apps_with_integrations,
                stats.unique_integrations,
                summary.files_written.len(),
                opts.export.out_dir().display()
            );
        }
    }
    Ok(())
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut print_taxonomy = false;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                opts.analysis.input = PathBuf::from(normalize_separators(&v));
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory")?;
                opts.export.set_out_dir(&normalize_separators(&v));
            }
            "--taxonomy" => {
                let v = args.next().ok_or("Missing value for --taxonomy")?;
                opts.analysis.taxonomy = Some(PathBuf::from(normalize_separators(&v)));
            }
            "--taxonomy-add" => {
                let v = args.next().ok_or("Missing value for --taxonomy-add")?;
                opts.analysis.taxonomy_add = Some(PathBuf::from(normalize_separators(&v)));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => opts.export.include_headers = true,
            "--no-headers" => opts.export.include_headers = false,
            "--top" => opts.analysis.top_n = parse_count(args.next(), "--top", 1)?,
            "--min-stack" => {
                opts.analysis.min_stack_size = parse_count(args.next(), "--min-stack", MIN_STACK_FLOOR)?
            }
            "--min-pair-count" => {
                opts.analysis.min_pair_count = parse_count(args.next(), "--min-pair-count", 1)?
            }
            "--min-stack-count" => {
                opts.analysis.min_stack_count = parse_count(args.next(), "--min-stack-count", 1)?
            }
            "--rare" => opts.analysis.rare_threshold = parse_count(args.next(), "--rare", 0)?,
            "--no-charts" => opts.export.charts = false,
            "--no-report" => opts.export.markdown = false,
            "--json" => opts.export.json = true,
            "--print-taxonomy" => print_taxonomy = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(if print_taxonomy { Command::PrintTaxonomy(opts) } else { Command::Run(opts) })
}

fn parse_count(v: Option<String>, flag: &str, min: usize) -> Result<usize, Box<dyn std::error::Error>> {
    let v = v.ok_or_else(|| format!("Missing value for {}", flag))?;
    let n: usize = v.trim().parse().map_err(|_| format!("Invalid number for {}: {}", flag, v))?;
    if n < min {
        return Err(format!("{} must be at least {}", flag, min).into());
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn parses_run_flags() {
        let cmd = parse_args(args(&["--input", "apps.tsv", "--format", "TSV", "--top", "5", "--json"])).unwrap();
        let Command::Run(o) = cmd else { panic!("expected run") };
        assert_eq!(o.analysis.input, PathBuf::from("apps.tsv"));
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert_eq!(o.analysis.top_n, 5);
        assert!(o.export.json);
    }

    #[test]
    fn parses_report_cutoffs() {
        let cmd = parse_args(args(&["--min-pair-count", "5", "--min-stack-count", "3"])).unwrap();
        let Command::Run(o) = cmd else { panic!("expected run") };
        assert_eq!(o.analysis.min_pair_count, 5);
        assert_eq!(o.analysis.min_stack_count, 3);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_args(args(&["--min-stack", "1"])).is_err());
        assert!(parse_args(args(&["--format", "xml"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--top"])).is_err());
        assert!(parse_args(args(&["--min-pair-count", "0"])).is_err());
    }
}
