// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub analysis: AnalysisOptions,
    pub export: ExportOptions,
}

/// The derived tables a run can export, one file each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Frequency,
    Pairs,
    Stacks,
    Density,
    Categories,
    Apps,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        ReportKind::Frequency,
        ReportKind::Pairs,
        ReportKind::Stacks,
        ReportKind::Density,
        ReportKind::Categories,
        ReportKind::Apps,
    ];

    /// File stem for the exported table.
    pub fn stem(&self) -> &'static str {
        match self {
            ReportKind::Frequency => "frequency",
            ReportKind::Pairs => "pairs",
            ReportKind::Stacks => "stacks",
            ReportKind::Density => "density",
            ReportKind::Categories => "categories",
            ReportKind::Apps => "apps",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Frequency => "Frequency",
            ReportKind::Pairs => "Pairs",
            ReportKind::Stacks => "Stacks",
            ReportKind::Density => "Density",
            ReportKind::Categories => "Categories",
            ReportKind::Apps => "Apps",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub input: PathBuf,
    /// Replaces the builtin taxonomy when set.
    pub taxonomy: Option<PathBuf>,
    /// Layered on top of whichever taxonomy is active.
    pub taxonomy_add: Option<PathBuf>,
    pub min_stack_size: usize,
    pub rare_threshold: usize,
    /// Pairs / stacks seen in fewer apps are left out of reports.
    pub min_pair_count: usize,
    pub min_stack_count: usize,
    /// Rows shown per ranked section in the Markdown report and charts.
    pub top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            taxonomy: None,
            taxonomy_add: None,
            min_stack_size: MIN_STACK_SIZE,
            rare_threshold: RARE_THRESHOLD,
            min_pair_count: MIN_PAIR_COUNT,
            min_stack_count: MIN_STACK_COUNT,
            top_n: TOP_N,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
    pub include_headers: bool,
    pub markdown: bool,
    pub json: bool,
    pub charts: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
            markdown: true,
            json: false,
            charts: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. A pasted file path
    /// (anything with an extension) keeps only its parent.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_dir = PathBuf::from(DEFAULT_OUT_DIR);
            return;
        }
        let p = Path::new(s);
        self.out_dir = match (p.extension(), p.parent()) {
            (Some(_), Some(parent)) => parent.to_path_buf(),
            _ => p.to_path_buf(),
        };
    }

    /// `<out>/<stem>.<ext>`; extension follows the format.
    pub fn table_path(&self, kind: ReportKind) -> PathBuf {
        self.out_dir.join(format!("{}.{}", kind.stem(), self.format.ext()))
    }

    pub fn report_path(&self) -> PathBuf {
        self.out_dir.join(REPORT_FILE)
    }

    pub fn json_path(&self) -> PathBuf {
        self.out_dir.join(JSON_FILE)
    }

    pub fn charts_dir(&self) -> PathBuf {
        self.out_dir.join(CHARTS_SUBDIR)
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}
