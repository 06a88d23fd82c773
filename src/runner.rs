// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    analysis::{self, Analysis},
    config::options::{AnalysisOptions, AppOptions, ExportOptions, ReportKind},
    file::{write_table, write_text},
    progress::Progress,
    records, report, store,
    taxonomy::Taxonomy,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub analysis: Analysis,
    pub files_written: Vec<PathBuf>,
}

/// Builtin taxonomy, or the user file when one is configured.
pub fn load_taxonomy(opts: &AnalysisOptions) -> Result<Taxonomy, Box<dyn Error>> {
    let tax = match &opts.taxonomy {
        Some(path) => {
            logf!("Runner: taxonomy from {}", path.display());
            Taxonomy::load(path)?
        }
        None => Taxonomy::builtin()?,
    };
    let tax = match &opts.taxonomy_add {
        Some(path) => {
            logf!("Runner: layering taxonomy {}", path.display());
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
            tax.merge_toml(&text)?
        }
        None => tax,
    };
    logd!(
        "Runner: taxonomy aliases={} categorized={}",
        tax.alias_count(),
        tax.categorized_count()
    );
    Ok(tax)
}

/// Load → standardize → aggregate → insights, no files written.
pub fn analyze_input(
    opts: &AnalysisOptions,
    progress: &mut dyn Progress,
) -> Result<Analysis, Box<dyn Error>> {
    let taxonomy = load_taxonomy(opts)?;
    let recs = records::load_records(&opts.input)?;
    progress.begin(recs.len());
    progress.log(&format!("Loaded {} apps from {}", recs.len(), opts.input.display()));

    let analysis = analysis::analyze(&recs, &taxonomy, opts);
    progress.stage_done("analyze");

    if let Err(e) = store::save_last_analysis(&analysis.standardized) {
        logw!("Runner: could not cache analysis: {}", e);
    }
    Ok(analysis)
}

/// Write every enabled output for a finished analysis.
pub fn export_all(
    analysis: &Analysis,
    export: &ExportOptions,
    top_n: usize,
    progress: &mut dyn Progress,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut written = Vec::new();

    for kind in ReportKind::ALL {
        let data = report::table(analysis, kind);
        let path = write_table(export, kind, &data)?;
        progress.file_written(&path);
        written.push(path);
    }

    if export.markdown {
        let path = export.report_path();
        write_text(&path, &report::render_markdown(analysis, top_n))?;
        progress.file_written(&path);
        written.push(path);
    }

    if export.json {
        let path = export.json_path();
        write_text(&path, &report::render_json(analysis)?)?;
        progress.file_written(&path);
        written.push(path);
    }

    if export.charts {
        for path in report::write_charts(analysis, &export.charts_dir(), top_n)? {
            progress.file_written(&path);
            written.push(path);
        }
    }

    progress.stage_done("export");
    logf!("Runner: wrote {} files to {}", written.len(), export.out_dir().display());
    Ok(written)
}

/// Top-level batch run used by the CLI.
pub fn run(options: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let result = analyze_input(&options.analysis, progress).and_then(|analysis| {
        let files_written =
            export_all(&analysis, &options.export, options.analysis.top_n, progress)?;
        Ok(RunSummary { analysis, files_written })
    });

    if let Err(e) = &result {
        loge!("Runner: {}", e);
    }
    progress.finish();
    result
}
