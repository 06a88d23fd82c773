// src/config/state.rs
use std::collections::BTreeSet;

use super::options::AppOptions;
use crate::taxonomy::Category;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Categories ticked in the left panel; filters rows on category-aware pages
    pub selected_categories: BTreeSet<Category>,

    pub window_w: u32,
    pub window_h: u32,

    /// Raw text of the path fields (parsed into options on ANALYZE/Export)
    pub input_text: String,
    pub out_dir_text: String,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_categories: Category::ALL.into_iter().collect(),
            window_w: 1100,
            window_h: 700,
            input_text: s!(),
            out_dir_text: s!(),
            current_page_index: 0,
        }
    }
}

impl GuiState {
    pub fn is_selected(&self, category: Category) -> bool {
        self.selected_categories.contains(&category)
    }

    pub fn toggle(&mut self, category: Category) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
