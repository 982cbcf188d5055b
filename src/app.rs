use eframe::egui::{self, Key, KeyboardShortcut, Modifiers};

use crate::state::{AppState, Settings};
use crate::ui::{panels, plot};

const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const GRAPH_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::G);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpectrumLabelerApp {
    pub state: AppState,
}

impl SpectrumLabelerApp {
    /// Restore persisted settings, falling back to defaults.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self {
            state: AppState::with_settings(settings),
        }
    }
}

impl eframe::App for SpectrumLabelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            panels::open_file_dialog(&mut self.state);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&GRAPH_SHORTCUT)) {
            self.state.graph();
        }

        // ---- Top panel: menu bar + path line ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: peak picking parameters ----
        egui::TopBottomPanel::bottom("peak_controls").show(ctx, |ui| {
            panels::peak_controls(ui, &mut self.state);
        });

        // ---- Right side panel: peak table ----
        if self.state.report.is_some() {
            egui::SidePanel::right("peak_table")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::peak_table(ui, &self.state);
                });
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::spectrum_plot(ui, &self.state);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.settings);
    }
}
