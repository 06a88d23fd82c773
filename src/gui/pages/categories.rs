// src/gui/pages/categories.rs
use crate::config::options::ReportKind;

pub struct CategoriesPage;
pub static PAGE: CategoriesPage = CategoriesPage;

impl super::Page for CategoriesPage {
    fn title(&self) -> &'static str { "Categories" }
    fn kind(&self) -> ReportKind { ReportKind::Categories }
    fn non_numeric_columns(&self) -> &'static [usize] { &[0, 5] }
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { Some(&[140, 60, 70, 80, 70, 420]) }
}
