use std::io;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use fft_peak_viewer::app::run_window;
use fft_peak_viewer::config::Cli;
use fft_peak_viewer::pipeline;
use fft_peak_viewer::report::write_report;
use fft_peak_viewer::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let no_window = cli.no_window;
    let config = cli.into_config();

    let analysis = pipeline::run(&config)?;
    write_report(&mut io::stdout().lock(), &analysis.peaks).context("writing peak report")?;

    if no_window {
        return Ok(());
    }

    let mut state = AppState::new(&config);
    state.set_analysis(analysis);
    run_window(state).map_err(|e| anyhow!("failed to open plot window: {e}"))
}
