// src/gui/pages/frequency.rs
use crate::config::options::ReportKind;

pub struct FrequencyPage;
pub static PAGE: FrequencyPage = FrequencyPage;

impl super::Page for FrequencyPage {
    fn title(&self) -> &'static str { "Top integrations" }
    fn kind(&self) -> ReportKind { ReportKind::Frequency }
    fn non_numeric_columns(&self) -> &'static [usize] { &[1, 2] }
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { Some(&[50, 220, 120, 60, 70]) }
}
