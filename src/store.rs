// src/store.rs
use std::{fs, io, path::PathBuf};

use crate::config::consts::{LAST_ANALYSIS_FILE, STORE_DIR};
use crate::pipeline::Standardized;

/// A rendered table: what the GUI shows and what Copy/Export write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: Some(headers.iter().map(|h| s!(*h)).collect()),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn last_analysis_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LAST_ANALYSIS_FILE)
}

/// Cache the standardized sets so the GUI can reopen on the last run
/// without re-reading the input.
pub fn save_last_analysis(standardized: &Standardized) -> io::Result<()> {
    let p = last_analysis_path();
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string(standardized).map_err(io::Error::other)?;
    fs::write(&p, json)
}

/// None when nothing is cached or the cache no longer parses.
pub fn load_last_analysis() -> Option<Standardized> {
    let txt = fs::read_to_string(last_analysis_path()).ok()?;
    match serde_json::from_str(&txt) {
        Ok(standardized) => Some(standardized),
        Err(e) => {
            logw!("Store: ignoring unreadable cache: {}", e);
            None
        }
    }
}
