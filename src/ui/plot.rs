use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{HLine, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::app::WINDOW_TITLE;
use crate::data::model::Analysis;
use crate::report::peak_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Plot data (display independent)
// ---------------------------------------------------------------------------

/// `(index, value)` for every sample of the mirrored series.
pub fn series_points(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}

/// Marker positions, one per peak.
pub fn peak_markers(analysis: &Analysis) -> Vec<[f64; 2]> {
    analysis
        .peaks
        .iter()
        .map(|p| [p.index as f64, p.value])
        .collect()
}

/// Label anchor and text for each peak; labels sit `offset` above the marker.
pub fn peak_labels(analysis: &Analysis, offset: f64) -> Vec<([f64; 2], String)> {
    analysis
        .peaks
        .iter()
        .map(|p| ([p.index as f64, p.value + offset], peak_label(p)))
        .collect()
}

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the mirrored series with its peaks in the central panel.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    let analysis = match &state.analysis {
        Some(a) => a,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a series file to plot it  (File → Open…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(WINDOW_TITLE).strong());
    });

    let colors = &state.colors;
    let markers = peak_markers(analysis);
    let labels = if state.show_labels {
        peak_labels(analysis, state.label_offset)
    } else {
        Vec::new()
    };

    Plot::new("series_plot")
        .legend(Legend::default())
        .x_axis_label("Index")
        .y_axis_label("Value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(series_points(&analysis.mirrored)))
                .name("Series")
                .color(colors.series)
                .width(1.5);
            plot_ui.line(line);

            plot_ui.hline(
                HLine::new(analysis.options.threshold)
                    .name("Threshold")
                    .color(colors.threshold),
            );

            for (i, marker) in markers.into_iter().enumerate() {
                let points = Points::new(PlotPoints::from(vec![marker]))
                    .name("Peaks")
                    .shape(MarkerShape::Cross)
                    .radius(6.0)
                    .color(colors.peak(i));
                plot_ui.points(points);
            }

            for (i, (pos, text)) in labels.into_iter().enumerate() {
                let label = Text::new(PlotPoint::new(pos[0], pos[1]), text)
                    .anchor(Align2::CENTER_BOTTOM)
                    .color(colors.peak(i));
                plot_ui.text(label);
            }
        });
}
