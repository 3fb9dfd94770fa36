use std::path::PathBuf;

use clap::Parser;

use crate::data::peaks::{PeakOptions, PlateauPolicy, DEFAULT_THRESHOLD};

/// Log file looked up next to the executable when no input is given.
pub const DEFAULT_INPUT_FILE: &str = "fft_256_logs_nodc_half.txt";

/// Vertical distance between a peak marker and its label.
pub const DEFAULT_LABEL_OFFSET: f64 = 500.0;

// ---------------------------------------------------------------------------
// Analysis configuration
// ---------------------------------------------------------------------------

/// Everything one run needs: where to read from and how to detect peaks.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub threshold: f64,
    pub label_offset: f64,
    pub plateau: PlateauPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: default_input_path(),
            threshold: DEFAULT_THRESHOLD,
            label_offset: DEFAULT_LABEL_OFFSET,
            plateau: PlateauPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn peak_options(&self) -> PeakOptions {
        PeakOptions {
            threshold: self.threshold,
            plateau: self.plateau,
        }
    }
}

/// `DEFAULT_INPUT_FILE` in the directory holding the running executable.
/// Falls back to the bare file name (relative to the working directory)
/// when the executable path cannot be resolved.
pub fn default_input_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_INPUT_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE))
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Mirror an FFT magnitude log, report its peaks and plot them.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Series file (.txt, .csv or .json). Defaults to fft_256_logs_nodc_half.txt next to the executable.
    pub input: Option<PathBuf>,

    /// Minimum peak height (inclusive)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Offset added to a peak's value to place its label
    #[arg(long, default_value_t = DEFAULT_LABEL_OFFSET)]
    pub label_offset: f64,

    /// How flat-topped peaks are reported
    #[arg(long, value_enum, default_value_t = PlateauPolicy::Ignore)]
    pub plateau: PlateauPolicy,

    /// Print the report and exit without opening the plot window
    #[arg(long)]
    pub no_window: bool,
}

impl Cli {
    pub fn into_config(self) -> AnalysisConfig {
        AnalysisConfig {
            input: self.input.unwrap_or_else(default_input_path),
            threshold: self.threshold,
            label_offset: self.label_offset,
            plateau: self.plateau,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cli = Cli::parse_from(["fft-peak-viewer"]);
        assert!(!cli.no_window);
        let config = cli.into_config();
        assert_eq!(config.threshold, 200_000.0);
        assert_eq!(config.label_offset, 500.0);
        assert_eq!(config.plateau, PlateauPolicy::Ignore);
        assert!(config.input.ends_with(DEFAULT_INPUT_FILE));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "fft-peak-viewer",
            "data/other.csv",
            "--threshold",
            "1500",
            "--label-offset",
            "20",
            "--plateau",
            "middle",
            "--no-window",
        ]);
        assert!(cli.no_window);
        let config = cli.into_config();
        assert_eq!(config.input, PathBuf::from("data/other.csv"));
        assert_eq!(config.threshold, 1500.0);
        assert_eq!(config.label_offset, 20.0);
        assert_eq!(config.peak_options().plateau, PlateauPolicy::Middle);
    }

    #[test]
    fn rejects_unknown_plateau_policy() {
        assert!(Cli::try_parse_from(["fft-peak-viewer", "--plateau", "widest"]).is_err());
    }
}
