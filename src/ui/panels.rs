use eframe::egui::{self, Color32, RichText, TextEdit, Ui, ViewportCommand};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu and the path / Open / Graph line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Menu", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(ViewportCommand::Close);
            }
        });

        if let Some(sp) = &state.spectrum {
            ui.separator();
            ui.label(format!("{} samples loaded", sp.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        let mut path_text = state
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let buttons_width = 140.0;
        ui.add(
            TextEdit::singleline(&mut path_text)
                .interactive(false)
                .desired_width(ui.available_width() - buttons_width),
        );
        if ui.button("Open").clicked() {
            open_file_dialog(state);
        }
        if ui.button("Graph").clicked() {
            state.graph();
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – peak picking parameters
// ---------------------------------------------------------------------------

/// Render the "Label peaks" toggle and the two parameter fields.
pub fn peak_controls(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.checkbox(&mut state.settings.label_peaks, "Label peaks");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.add(TextEdit::singleline(&mut state.settings.cutoff_text).desired_width(120.0));
            ui.label("Low mass filter:");
            ui.add(TextEdit::singleline(&mut state.settings.height_text).desired_width(120.0));
            ui.label("Peak height:");
        });
    });
}

// ---------------------------------------------------------------------------
// Right side panel – peak table
// ---------------------------------------------------------------------------

/// Render the (Peak, Intensity) table and the total.
pub fn peak_table(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        return;
    };

    ui.heading("Peaks");
    ui.label(format!("Total of peaks: {}", report.total_intensity));
    ui.separator();

    if report.is_empty() {
        ui.label("No peaks above threshold.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Peak");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Intensity");
            });
        })
        .body(|mut body| {
            for peak in report.iter() {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}", peak.x));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}", peak.height));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open file")
        .add_filter("Text", &["txt"]);
    if let Some(dir) = &state.settings.last_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        state.open(&path);
    }
}
