use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Plot colours
// ---------------------------------------------------------------------------

/// Colours for one rendering of the series plot.
#[derive(Debug, Clone)]
pub struct PlotColors {
    pub series: Color32,
    pub threshold: Color32,
    peaks: Vec<Color32>,
}

impl PlotColors {
    /// One distinct marker colour per peak.
    pub fn for_peaks(n_peaks: usize) -> Self {
        PlotColors {
            series: Color32::LIGHT_BLUE,
            threshold: Color32::from_rgb(200, 80, 80),
            peaks: generate_palette(n_peaks),
        }
    }

    /// Marker colour for the `i`-th peak.
    pub fn peak(&self, i: usize) -> Color32 {
        self.peaks.get(i).copied().unwrap_or(Color32::YELLOW)
    }
}
