// src/gui/pages/apps.rs
use crate::config::options::ReportKind;

pub struct AppsPage;
pub static PAGE: AppsPage = AppsPage;

impl super::Page for AppsPage {
    fn title(&self) -> &'static str { "Apps" }
    fn kind(&self) -> ReportKind { ReportKind::Apps }
    fn non_numeric_columns(&self) -> &'static [usize] { &[0, 1, 3] }
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { Some(&[180, 220, 90, 520]) }
}
