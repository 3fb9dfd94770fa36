use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fft_peak_viewer::config::DEFAULT_INPUT_FILE;

/// Number of bins in half of a 256-point spectrum with DC removed.
const HALF_BINS: usize = 128;

/// Write a synthetic FFT magnitude log (one value per line) for trying the viewer.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Output path
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    output: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_magnitudes(tones: &[(f64, f64, f64)], noise_level: f64, noise: &mut Noise) -> Vec<f64> {
    (1..=HALF_BINS)
        .map(|bin| {
            let bin = bin as f64;
            let signal: f64 = tones
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(bin, mu, sigma, amp))
                .sum();
            (signal + noise.gauss(noise_level)).abs()
        })
        .collect()
}

/// Seeded Gaussian noise source (splitmix64 + Box-Muller).
struct Noise(u64);

impl Noise {
    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    fn gauss(&mut self, std_dev: f64) -> f64 {
        let r = (-2.0 * self.uniform().max(1e-15).ln()).sqrt();
        r * (std::f64::consts::TAU * self.uniform()).cos() * std_dev
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut noise = Noise(args.seed);

    // (bin, width in bins, magnitude): two tones above the default threshold, one below.
    let tones = [(12.0, 1.2, 650_000.0), (47.0, 1.5, 320_000.0), (90.0, 2.0, 120_000.0)];
    let magnitudes = generate_magnitudes(&tones, 4_000.0, &mut noise);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    for m in &magnitudes {
        writeln!(out, "{m:.3}")?;
    }
    out.flush()?;

    println!(
        "Wrote {} magnitudes to {}",
        magnitudes.len(),
        args.output.display()
    );
    Ok(())
}
