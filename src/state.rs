use std::path::Path;

use crate::color::PlotColors;
use crate::config::AnalysisConfig;
use crate::data::loader::load_file;
use crate::data::model::Analysis;
use crate::data::peaks::{PeakOptions, PlateauPolicy};
use crate::pipeline;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current analysis (None if the window was opened without data).
    pub analysis: Option<Analysis>,

    /// Detection options being edited in the side panel.
    pub options: PeakOptions,

    /// Vertical offset between a peak marker and its label.
    pub label_offset: f64,

    /// Whether `(index, value)` labels are drawn next to the markers.
    pub show_labels: bool,

    /// Marker colours, rebuilt whenever the peak set changes.
    pub colors: PlotColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl AppState {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            analysis: None,
            options: config.peak_options(),
            label_offset: config.label_offset,
            show_labels: true,
            colors: PlotColors::for_peaks(0),
            status_message: None,
        }
    }

    /// Ingest a completed analysis and adopt its detection options.
    pub fn set_analysis(&mut self, analysis: Analysis) {
        self.options = analysis.options;
        self.colors = PlotColors::for_peaks(analysis.peaks.len());
        self.analysis = Some(analysis);
        self.status_message = None;
    }

    /// Load another file with the current options.  On failure the previous
    /// analysis is kept and the error is shown in the status bar.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(series) => {
                let analysis = pipeline::analyze(series, self.options);
                self.set_analysis(analysis);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Change the height threshold and re-run detection.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.options.threshold = threshold;
        self.redetect();
    }

    /// Change the flat-top policy and re-run detection.
    pub fn set_plateau(&mut self, plateau: PlateauPolicy) {
        self.options.plateau = plateau;
        self.redetect();
    }

    fn redetect(&mut self) {
        if let Some(analysis) = &mut self.analysis {
            analysis.redetect(self.options);
            self.colors = PlotColors::for_peaks(analysis.peaks.len());
        }
    }

    /// Current peaks as a JSON array of `{index, value}` objects.
    pub fn peaks_json(&self) -> serde_json::Result<String> {
        let peaks = self
            .analysis
            .as_ref()
            .map(|a| a.peaks.as_slice())
            .unwrap_or(&[]);
        serde_json::to_string_pretty(peaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;
    use std::fs;
    use tempfile::TempDir;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_analysis(pipeline::analyze(
            Series::new(vec![0.0, 300_000.0, 0.0, 150_000.0, 0.0]),
            PeakOptions::default(),
        ));
        state
    }

    #[test]
    fn threshold_change_redetects() {
        let mut state = loaded_state();
        assert_eq!(state.analysis.as_ref().unwrap().peaks.len(), 2);

        state.set_threshold(100_000.0);
        let analysis = state.analysis.as_ref().unwrap();
        assert_eq!(analysis.peak_indices(), vec![1, 3, 6, 8]);
        assert_ne!(state.colors.peak(0), state.colors.peak(3));
    }

    #[test]
    fn plateau_change_redetects() {
        let mut state = AppState::default();
        // Mirroring puts a two-sample flat top in the middle.
        state.set_analysis(pipeline::analyze(
            Series::new(vec![0.0, 100.0, 400_000.0]),
            PeakOptions::default(),
        ));
        assert!(state.analysis.as_ref().unwrap().peaks.is_empty());

        state.set_plateau(PlateauPolicy::First);
        assert_eq!(state.analysis.as_ref().unwrap().peak_indices(), vec![2]);
    }

    #[test]
    fn failed_load_keeps_previous_analysis() {
        let mut state = loaded_state();
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "1\nnot-a-number\n").unwrap();

        state.load_path(&bad);
        assert!(state.status_message.as_deref().unwrap().contains("not-a-number"));
        assert_eq!(state.analysis.as_ref().unwrap().peaks.len(), 2);
    }

    #[test]
    fn successful_load_replaces_analysis() {
        let mut state = loaded_state();
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("next.txt");
        fs::write(&good, "0\n250000\n0\n").unwrap();

        state.load_path(&good);
        assert!(state.status_message.is_none());
        let analysis = state.analysis.as_ref().unwrap();
        assert_eq!(analysis.series.display_name(), "next.txt");
        assert_eq!(analysis.peak_indices(), vec![1, 4]);
    }

    #[test]
    fn peaks_serialize_as_json() {
        let state = loaded_state();
        let json: serde_json::Value = serde_json::from_str(&state.peaks_json().unwrap()).unwrap();
        assert_eq!(json[0]["index"], 1);
        assert_eq!(json[1]["index"], 8);
        assert_eq!(json[0]["value"], 300_000.0);
    }
}
