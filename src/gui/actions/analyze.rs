// src/gui/actions/analyze.rs
use std::path::PathBuf;

use crate::file::normalize_separators;
use crate::gui::{app::App, progress::GuiProgress};
use crate::runner;

/// Run the pipeline on the input field's file and swap in the result.
pub fn analyze(app: &mut App) {
    let input = app.state.gui.input_text.trim();
    if input.is_empty() {
        app.status("No input file");
        return;
    }
    app.state.options.analysis.input = PathBuf::from(normalize_separators(input));

    logf!("Analyze: Begin input={}", app.state.options.analysis.input.display());

    app.running = true;
    let mut prog = GuiProgress::new(app.status.clone());
    let res = runner::analyze_input(&app.state.options.analysis, &mut prog);
    app.running = false;

    match res {
        Ok(analysis) => {
            logf!(
                "Analyze: OK apps={} integrations={}",
                analysis.total_apps(),
                analysis.aggregates.frequency.len()
            );
            app.analysis = Some(analysis);
            app.rebuild_view();
            app.status(format!("Ready: {} rows", app.rows.len()));
        }
        Err(e) => {
            loge!("Analyze: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
