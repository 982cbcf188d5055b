use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::state::AppState;

const PEAK_COLOR: Color32 = Color32::from_rgb(220, 80, 40);

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the spectrum, with labelled peak markers when a report exists.
pub fn spectrum_plot(ui: &mut Ui, state: &AppState) {
    let spectrum = match &state.spectrum {
        Some(sp) => sp,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view the spectrum  (Ctrl+O)");
            });
            return;
        }
    };

    Plot::new("spectrum_plot")
        .x_axis_label("Mass to Charge Ratio")
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = spectrum.samples().map(|s| [s.x, s.y]).collect();
            plot_ui.line(Line::new(points).width(1.5));

            let Some(report) = &state.report else {
                return;
            };

            let markers: PlotPoints = report.iter().map(|p| [p.x, p.height]).collect();
            plot_ui.points(Points::new(markers).radius(3.0).color(PEAK_COLOR));

            for peak in report.iter() {
                let label = RichText::new(format!("{}", peak.x)).size(10.0);
                plot_ui.text(
                    Text::new(PlotPoint::new(peak.x, peak.height), label)
                        .anchor(Align2::CENTER_BOTTOM)
                        .color(PEAK_COLOR),
                );
            }
        });
}
