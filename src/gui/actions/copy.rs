// src/gui/actions/copy.rs
use eframe::egui;

use crate::csv::to_export_string;
use crate::gui::app::App;

/// Current table, as displayed (category filter applied), to the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = to_export_string(&app.headers, &app.rows, export.include_headers, export.delim());
    logf!(
        "Copy: page={:?}, rows={}, headers={}",
        app.current_page_kind(),
        app.rows.len(),
        app.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    );
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
