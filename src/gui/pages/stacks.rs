// src/gui/pages/stacks.rs
use crate::config::options::ReportKind;

pub struct StacksPage;
pub static PAGE: StacksPage = StacksPage;

impl super::Page for StacksPage {
    fn title(&self) -> &'static str { "Stacks" }
    fn kind(&self) -> ReportKind { ReportKind::Stacks }
    fn non_numeric_columns(&self) -> &'static [usize] { &[1] }
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { Some(&[50, 520, 60]) }
}
