// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
            ui.checkbox(&mut export.markdown, "report.md");
            ui.checkbox(&mut export.json, "analysis.json");
            ui.checkbox(&mut export.charts, "Charts");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
        }
    }

    // --- Input + Output fields ---
    let mut open_folder_clicked = false;
    egui::Grid::new("paths").num_columns(3).show(ui, |ui| {
        ui.label("Input:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.input_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0))
            .changed()
        {
            logd!("UI: input_text changed → {}", app.state.gui.input_text);
        }
        ui.end_row();

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0))
            .changed()
        {
            logd!("UI: out_dir_text changed → {}", app.state.gui.out_dir_text);
        }
        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
        ui.end_row();
    });

    if open_folder_clicked {
        actions::open_output_folder(app);
    }

    // --- Actions (Copy / Export / ANALYZE) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Copy the current table").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").on_hover_text("Write all tables and reports").clicked() {
            actions::export(app);
        }

        let green = egui::Color32::from_rgb(40, 160, 90);
        let black = egui::Color32::BLACK;
        let analyze = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("ANALYZE").color(black).strong()).fill(green),
        );
        if analyze.clicked() {
            actions::analyze(app);
        }

        if app.running {
            ui.add(egui::Spinner::new().size(16.0));
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
