// src/report/mod.rs
//! Renderers over a finished [`Analysis`](crate::analysis::Analysis):
//! Markdown report, per-table CSV/TSV, JSON dump and PNG charts.

pub mod chart;
pub mod json;
pub mod markdown;
pub mod tables;

pub use chart::{bar_chart, heatmap, write_charts};
pub use json::{render_json, JsonReport};
pub use markdown::render_markdown;
pub use tables::{table, table_filtered, table_headers};
