// src/gui/pages/density.rs
use crate::config::options::ReportKind;

pub struct DensityPage;
pub static PAGE: DensityPage = DensityPage;

impl super::Page for DensityPage {
    fn title(&self) -> &'static str { "Density" }
    fn kind(&self) -> ReportKind { ReportKind::Density }
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { Some(&[100, 80, 80]) }
    fn uses_category_filter(&self) -> bool { false }
}
