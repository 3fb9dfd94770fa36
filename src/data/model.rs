use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::peaks::{find_peaks_with, PeakOptions};
use super::transform::mirror;

// ---------------------------------------------------------------------------
// Series – the samples read from one input file
// ---------------------------------------------------------------------------

/// An ordered sequence of samples, one per non-blank line of the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// Sample values in file order.
    pub values: Vec<f64>,
    /// Where the samples came from (None for in-memory series).
    pub source: Option<PathBuf>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Series {
            values,
            source: None,
        }
    }

    pub fn from_file(values: Vec<f64>, path: &Path) -> Self {
        Series {
            values,
            source: Some(path.to_path_buf()),
        }
    }

    /// `values` followed by `values` reversed.
    pub fn mirrored(&self) -> Vec<f64> {
        mirror(&self.values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Short display name of the source file, used for titles.
    pub fn display_name(&self) -> String {
        self.source
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}

// ---------------------------------------------------------------------------
// Peak – one detected local maximum
// ---------------------------------------------------------------------------

/// A local maximum of the mirrored series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    /// Index into the mirrored series.
    pub index: usize,
    pub value: f64,
}

impl fmt::Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.index, self.value)
    }
}

// ---------------------------------------------------------------------------
// Analysis – the complete result of one pipeline run
// ---------------------------------------------------------------------------

/// Loaded series, its mirror and the peaks found in the mirror.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub series: Series,
    /// `series ++ reverse(series)`, length `2 * series.len()`.
    pub mirrored: Vec<f64>,
    /// Peaks in ascending index order.
    pub peaks: Vec<Peak>,
    /// Options the current peak set was detected with.
    pub options: PeakOptions,
}

impl Analysis {
    /// Mirror `series` and detect peaks in the result.
    pub fn new(series: Series, options: PeakOptions) -> Self {
        let mirrored = series.mirrored();
        let peaks = find_peaks_with(&mirrored, &options);
        Analysis {
            series,
            mirrored,
            peaks,
            options,
        }
    }

    /// Re-run detection on the existing mirrored series.
    pub fn redetect(&mut self, options: PeakOptions) {
        self.peaks = find_peaks_with(&self.mirrored, &options);
        self.options = options;
    }

    pub fn peak_indices(&self) -> Vec<usize> {
        self.peaks.iter().map(|p| p.index).collect()
    }
}
