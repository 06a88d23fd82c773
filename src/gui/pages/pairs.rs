// src/gui/pages/pairs.rs
use crate::config::options::ReportKind;

pub struct PairsPage;
pub static PAGE: PairsPage = PairsPage;

impl super::Page for PairsPage {
    fn title(&self) -> &'static str { "Pairs" }
    fn kind(&self) -> ReportKind { ReportKind::Pairs }
    fn non_numeric_columns(&self) -> &'static [usize] { &[0, 1] }
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { Some(&[220, 220, 60, 60]) }
}
