use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::peaks::PlateauPolicy;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – detection settings and peak table
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Detection");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Threshold");
        let mut threshold = state.options.threshold;
        let response = ui.add(
            egui::DragValue::new(&mut threshold)
                .speed(1000.0)
                .range(0.0..=f64::MAX),
        );
        if response.changed() {
            state.set_threshold(threshold);
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Flat tops");
        let current = state.options.plateau;
        egui::ComboBox::from_id_salt("plateau_policy")
            .selected_text(current.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for policy in PlateauPolicy::ALL {
                    if ui
                        .selectable_label(current == policy, policy.to_string())
                        .clicked()
                    {
                        state.set_plateau(policy);
                    }
                }
            });
    });

    ui.checkbox(&mut state.show_labels, "Show labels");
    ui.separator();

    let Some(analysis) = &state.analysis else {
        ui.label("No series loaded.");
        return;
    };

    ui.strong(format!("Peaks ({})", analysis.peaks.len()));

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Index");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Value");
            });
        })
        .body(|body| {
            body.rows(18.0, analysis.peaks.len(), |mut row| {
                let peak = analysis.peaks[row.index()];
                let color = state.colors.peak(row.index());
                row.col(|ui: &mut Ui| {
                    ui.label(RichText::new(peak.index.to_string()).color(color));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", peak.value));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Copy peaks as JSON").clicked() {
                match state.peaks_json() {
                    Ok(json) => ui.ctx().copy_text(json),
                    Err(e) => log::error!("Failed to serialize peaks: {e}"),
                }
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(analysis) = &state.analysis {
            ui.label(format!(
                "{}: {} samples, {} mirrored, {} peaks",
                analysis.series.display_name(),
                analysis.series.len(),
                analysis.mirrored.len(),
                analysis.peaks.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open series")
        .add_filter("Supported files", &["txt", "log", "dat", "csv", "json"])
        .add_filter("Text", &["txt", "log", "dat"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
