// src/gui/components/category_panel.rs
//
// Renders the left category list and applies selection changes directly to `app`.
// Click toggles one category; ctrl+click selects only that one.

use eframe::egui;
use crate::gui::app::App;
use crate::taxonomy::Category;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Categories");

    let apply_selection_change = |app: &mut App| {
        app.rebuild_view();
        // Don't overwrite progress messages with selection info
        if !app.running {
            app.set_selection_message();
        }
    };

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_categories = Category::ALL.into_iter().collect();
            apply_selection_change(app);
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_categories.clear();
            apply_selection_change(app);
        }
    });

    ui.separator();

    let mut changed = false;
    for cat in Category::ALL {
        let is_selected = app.state.gui.is_selected(cat);
        let count = app
            .analysis
            .as_ref()
            .and_then(|a| a.categories.iter().find(|c| c.category == cat))
            .map(|c| c.unique)
            .unwrap_or(0);
        let resp = ui.selectable_label(is_selected, format!("{} ({})", cat.label(), count));

        if resp.clicked() && !app.running {
            if ui.input(|i| i.modifiers.ctrl) {
                app.state.gui.selected_categories.clear();
                app.state.gui.selected_categories.insert(cat);
            } else {
                app.state.gui.toggle(cat);
            }
            changed = true;
        }
    }

    if changed {
        apply_selection_change(app);
        logf!("UI: Category selection → {:?}", app.state.gui.selected_categories);
    }

    if let Some(a) = &app.analysis {
        ui.separator();
        let stats = &a.standardized.stats;
        ui.label(format!("Apps: {}", stats.total_apps));
        ui.label(format!("With integrations: {}", stats.apps_with_integrations));
        ui.label(format!("Unique integrations: {}", stats.unique_integrations));
        ui.label(format!("Rejected mentions: {}", stats.rejected_total()));
    }
}
