// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::Analysis,
    config::{options::ReportKind, state::AppState},
    report, store,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "App Integrations",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last finished analysis; every tab is a view of it
    pub analysis: Option<Analysis>,

    // in-memory display for CURRENT page
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,

    // status line (GuiProgress writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.gui.input_text = state.options.analysis.input.to_string_lossy().into_owned();
        state.gui.out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        let mut status = s!("Idle");

        let analysis = match store::load_last_analysis() {
            Some(cached) => {
                logf!("Cache: Loaded last analysis (apps={})", cached.apps.len());
                status = s!("Loaded last analysis");
                Some(Analysis::from_standardized(cached, &state.options.analysis))
            }
            None => {
                logd!("Cache: no previous analysis");
                None
            }
        };

        let mut app = Self {
            state,
            analysis,
            headers: None,
            rows: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
        };
        app.rebuild_view();
        logf!("Init: pages={}, default page={:?}", router::all_pages().len(), app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> ReportKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn set_selection_message(&self) {
        let n = self.state.gui.selected_categories.len();
        self.status(format!("Showing {} categor{}, {} rows", n, if n == 1 { "y" } else { "ies" }, self.rows.len()));
    }

    /// Rebuild headers/rows for the current tab from the analysis + category selection.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        match &self.analysis {
            Some(a) => {
                let filter = page
                    .uses_category_filter()
                    .then_some(&self.state.gui.selected_categories);
                let ds = page.build(a, filter);
                self.headers = ds.headers;
                self.rows = ds.rows;
            }
            None => {
                self.headers = Some(report::table_headers(page.kind()).iter().map(|h| s!(*h)).collect());
                self.rows = Vec::new();
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("categories")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::category_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
