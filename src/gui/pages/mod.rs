// src/gui/pages/mod.rs
use std::collections::BTreeSet;

use crate::{analysis::Analysis, config::options::ReportKind, report, store::DataSet, taxonomy::Category};

pub mod apps;
pub mod categories;
pub mod density;
pub mod frequency;
pub mod pairs;
pub mod stacks;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> ReportKind;

    /// Columns rendered left-aligned; everything else is centered as a number.
    fn non_numeric_columns(&self) -> &'static [usize] { &[] }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { None }

    /// Whether the category panel narrows this table.
    fn uses_category_filter(&self) -> bool { true }

    /// Build the on-screen table. Copy/Export use the same rows.
    fn build(&self, analysis: &Analysis, selected: Option<&BTreeSet<Category>>) -> DataSet {
        report::table_filtered(analysis, self.kind(), selected)
    }
}
