// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ReportKind};
use crate::csv::to_export_string;
use crate::store::DataSet;

/// Write one table export based on ExportOptions (directory, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_table(
    export: &ExportOptions,
    kind: ReportKind,
    data: &DataSet,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.table_path(kind);
    let contents = to_export_string(
        &data.headers,
        &data.rows,
        export.include_headers,
        export.delim(),
    );
    write_text(&path, &contents)?;
    Ok(path)
}

/// Create parent directories as needed, then create/truncate `path`.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)
        .map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
