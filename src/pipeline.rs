use anyhow::Result;

use crate::config::AnalysisConfig;
use crate::data::loader::load_file;
use crate::data::model::{Analysis, Series};
use crate::data::peaks::PeakOptions;

/// Load the configured file, mirror it and detect peaks.
pub fn run(config: &AnalysisConfig) -> Result<Analysis> {
    let series = load_file(&config.input)?;
    Ok(analyze(series, config.peak_options()))
}

/// Mirror `series` and detect peaks. No I/O.
pub fn analyze(series: Series, options: PeakOptions) -> Analysis {
    let analysis = Analysis::new(series, options);
    log::info!(
        "{}: {} samples mirrored to {}, {} peaks at threshold {}",
        analysis.series.display_name(),
        analysis.series.len(),
        analysis.mirrored.len(),
        analysis.peaks.len(),
        options.threshold
    );
    analysis
}
