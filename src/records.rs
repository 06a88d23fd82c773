// src/records.rs
//
// Input side of the pipeline: turns a delimited app table into RawRecords.
// Column detection is by header name, so exports from different upstream
// steps (warehouse dump, scraper output, processed file) all load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::sanitize::strip_list_decoration;
use crate::csv::{find_column, parse_rows, sniff_delim};

const ID_COLUMNS: &[&str] = &["app_id", "api_key", "id", "app"];
const NAME_COLUMNS: &[&str] = &["app_name", "name", "title"];
const INTEGRATION_COLUMNS: &[&str] = &["integrations", "processed_integrations", "raw_integrations"];

/// One scraped app listing, before any cleaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub app_id: String,
    pub app_name: Option<String>,
    pub raw_integrations: Vec<String>,
}

impl RawRecord {
    pub fn new(app_id: impl Into<String>, raw: &[&str]) -> Self {
        Self {
            app_id: app_id.into(),
            app_name: None,
            raw_integrations: raw.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Split a persisted integrations field into raw mentions.
/// Accepts comma- or pipe-joined lists and Python-style list literals.
/// Empty pieces are dropped; an empty field yields no mentions.
pub fn split_integrations_field(field: &str) -> Vec<String> {
    let cleaned = strip_list_decoration(field);
    cleaned
        .split([',', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Parse an app table. The first row must be a header naming an
/// integrations column; without one every row loads with no mentions.
pub fn parse_records(text: &str) -> Vec<RawRecord> {
    let sep = sniff_delim(text);
    let mut rows = parse_rows(text, sep).into_iter();

    let Some(headers) = rows.next() else {
        return Vec::new();
    };

    let id_col = find_column(&headers, ID_COLUMNS);
    let name_col = find_column(&headers, NAME_COLUMNS);
    let int_col = find_column(&headers, INTEGRATION_COLUMNS);

    if int_col.is_none() {
        logw!("Records: no integrations column in headers {:?}", headers);
    }

    let mut out = Vec::new();
    for (i, row) in rows.enumerate() {
        let cell = |col: Option<usize>| {
            col.and_then(|c| row.get(c))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let app_name = cell(name_col);
        let app_id = cell(id_col)
            .or_else(|| app_name.clone())
            .unwrap_or_else(|| (i + 1).to_string());

        let raw_integrations = cell(int_col)
            .map(|f| split_integrations_field(&f))
            .unwrap_or_default();

        out.push(RawRecord { app_id, app_name, raw_integrations });
    }

    logd!("Records: parsed {} rows (sep={:?})", out.len(), sep);
    out
}

pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read input {}: {}", path.display(), e))?;
    let records = parse_records(&text);
    logf!("Records: loaded {} apps from {}", records.len(), path.display());
    Ok(records)
}
