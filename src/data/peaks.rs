use std::fmt;

use clap::ValueEnum;

use super::model::Peak;

/// Default minimum height a sample must reach to count as a peak.
pub const DEFAULT_THRESHOLD: f64 = 200_000.0;

// ---------------------------------------------------------------------------
// Detection options
// ---------------------------------------------------------------------------

/// What to report for a flat top (two or more equal adjacent samples whose
/// outer neighbours are both strictly lower).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PlateauPolicy {
    /// Flat tops are never peaks; every reported sample is strictly greater
    /// than both neighbours.
    #[default]
    Ignore,
    /// Report the first sample of the flat top.
    First,
    /// Report the middle sample, rounding down.
    Middle,
}

impl PlateauPolicy {
    pub const ALL: [PlateauPolicy; 3] = [
        PlateauPolicy::Ignore,
        PlateauPolicy::First,
        PlateauPolicy::Middle,
    ];
}

impl fmt::Display for PlateauPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateauPolicy::Ignore => write!(f, "ignore"),
            PlateauPolicy::First => write!(f, "first"),
            PlateauPolicy::Middle => write!(f, "middle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakOptions {
    /// Minimum peak height (inclusive).
    pub threshold: f64,
    pub plateau: PlateauPolicy,
}

impl Default for PeakOptions {
    fn default() -> Self {
        PeakOptions {
            threshold: DEFAULT_THRESHOLD,
            plateau: PlateauPolicy::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Strict local maxima of `data` whose value is at least `threshold`.
///
/// Boundary samples are never peaks. Indices come back in ascending order.
pub fn find_peaks(data: &[f64], threshold: f64) -> Vec<Peak> {
    find_peaks_with(
        data,
        &PeakOptions {
            threshold,
            plateau: PlateauPolicy::Ignore,
        },
    )
}

/// Local maxima of `data` at or above `options.threshold`, with flat tops
/// handled according to `options.plateau`.
pub fn find_peaks_with(data: &[f64], options: &PeakOptions) -> Vec<Peak> {
    let mut peaks = Vec::new();
    if data.len() < 3 {
        return peaks;
    }

    let last = data.len() - 1;
    let mut i = 1;
    while i < last {
        let value = data[i];
        let rising = value > data[i - 1];
        if !rising {
            i += 1;
            continue;
        }

        // Walk to the end of a possible flat top starting at `i`.
        let mut end = i;
        while end < last && data[end + 1] == value {
            end += 1;
        }

        if end == last {
            // Flat run touches the right boundary.
            break;
        }

        if data[end + 1] < value && value >= options.threshold {
            let picked = if end == i {
                Some(i)
            } else {
                match options.plateau {
                    PlateauPolicy::Ignore => None,
                    PlateauPolicy::First => Some(i),
                    PlateauPolicy::Middle => Some(i + (end - i) / 2),
                }
            };
            if let Some(index) = picked {
                peaks.push(Peak { index, value });
            }
        }

        i = end + 1;
    }

    log::debug!(
        "found {} peaks in {} samples (threshold {}, plateau {})",
        peaks.len(),
        data.len(),
        options.threshold,
        options.plateau
    );
    peaks
}
