use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use spectrum_labeler::data::loader;
use spectrum_labeler::{PeakQuery, PeakReport, Spectrum};

// ---------------------------------------------------------------------------
// Persisted settings
// ---------------------------------------------------------------------------

/// User-editable settings that survive restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "Peak height" text field.
    pub height_text: String,
    /// "Low mass filter" text field. Empty disables the cutoff.
    pub cutoff_text: String,
    /// Whether peaks are detected and labelled on graph.
    pub label_peaks: bool,
    /// Directory the open dialog starts in.
    pub last_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height_text: "1000".to_string(),
            cutoff_text: "16.00".to_string(),
            label_peaks: false,
            last_dir: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub settings: Settings,

    /// Loaded spectrum (None until user loads a file).
    pub spectrum: Option<Spectrum>,

    /// Path of the loaded file, shown in the path field.
    pub path: Option<PathBuf>,

    /// Peaks from the last graph action, if labelling was on.
    pub report: Option<PeakReport>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Load a spectrum file, replacing the current one on success.
    pub fn open(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(spectrum) => {
                log::info!("Loaded {} samples from {}", spectrum.len(), path.display());
                self.settings.last_dir = path.parent().map(Path::to_path_buf);
                self.set_spectrum(path.to_path_buf(), spectrum);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded spectrum. Any previous report is discarded.
    pub fn set_spectrum(&mut self, path: PathBuf, spectrum: Spectrum) {
        self.spectrum = Some(spectrum);
        self.path = Some(path);
        self.report = None;
        self.status_message = None;
    }

    /// Re-run peak extraction with the current text fields.
    ///
    /// Bad input leaves the previous plot in place and sets the status line.
    pub fn graph(&mut self) {
        self.report = None;
        if !self.settings.label_peaks {
            self.status_message = None;
            return;
        }
        let Some(spectrum) = &self.spectrum else {
            self.status_message = Some("No spectrum loaded.".to_string());
            return;
        };

        let result = PeakQuery::parse(&self.settings.height_text, &self.settings.cutoff_text)
            .and_then(|query| spectrum.find_peaks(&query));

        match result {
            Ok(report) => {
                log::info!("Total of peaks: {}", report.total_intensity);
                self.report = Some(report);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Peak labelling rejected: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
