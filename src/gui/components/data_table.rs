// src/gui/components/data_table.rs
//
// Draws the live table for the current tab. Purely a view over
// app.headers / app.rows; widths come from the page hints.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    let cols = app
        .headers
        .as_ref()
        .map(|h| h.len())
        .or_else(|| app.rows.first().map(|r| r.len()))
        .unwrap_or(0);
    if cols == 0 {
        ui.label("No data. Pick an input file and press ANALYZE.");
        return;
    }

    let widths: Vec<f32> = (0..cols)
        .map(|ci| {
            page.preferred_column_widths()
                .and_then(|ws| ws.get(ci))
                .map(|&w| w as f32)
                .unwrap_or(80.0)
        })
        .collect();
    let non_numeric = page.non_numeric_columns();

    // Scroll bars allocate space instead of floating over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", page.kind().stem()));
            for w in &widths {
                table = table.column(Column::initial(*w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        let text = app
                            .headers
                            .as_ref()
                            .and_then(|h| h.get(ci).cloned())
                            .unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = egui::Label::new(RichText::new(text).strong()).selectable(false);
                            if non_numeric.contains(&ci) {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                            } else {
                                ui.centered_and_justified(|ui| { ui.add(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.rows.len(), |mut row| {
                        let Some(data) = app.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if non_numeric.contains(&ci) {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                } else {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
