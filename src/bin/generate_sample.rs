use std::fmt::Write as _;

use anyhow::{Context, Result};
use spectrum_labeler::data::loader;
use spectrum_labeler::PeakQuery;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_spectrum(
    masses: &[f64],
    peaks: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    masses
        .iter()
        .map(|&mz| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(mz, mu, sigma, amp))
                .sum();
            (signal + rng.gauss(0.0, noise_level)).max(0.0)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    // m/z 1.0 → 100.0, step 0.1
    let masses: Vec<f64> = (10..=1000).map(|i| i as f64 / 10.0).collect();

    // Residual gas: H2O and fragments, N2, O2, Ar, CO2
    let peaks = [
        (14.0, 0.15, 3_000.0),
        (16.0, 0.15, 2_500.0),
        (17.0, 0.15, 9_000.0),
        (18.0, 0.15, 40_000.0),
        (28.0, 0.15, 120_000.0),
        (32.0, 0.15, 30_000.0),
        (40.0, 0.15, 1_500.0),
        (44.0, 0.15, 6_000.0),
    ];

    let intensities = generate_spectrum(&masses, &peaks, 20.0, &mut rng);

    let mut text = String::with_capacity(masses.len() * 16);
    for (mz, y) in masses.iter().zip(&intensities) {
        writeln!(text, "{mz:.1}\t{y:.2}")?;
    }

    let output_path = std::path::Path::new("sample_spectrum.txt");
    std::fs::write(output_path, text)
        .with_context(|| format!("writing {}", output_path.display()))?;

    let spectrum = loader::load_file(output_path)?;
    let report = spectrum.find_peaks(&PeakQuery::default())?;

    println!(
        "Wrote {} samples to {}; {} peaks with default settings, total {:.0}",
        spectrum.len(),
        output_path.display(),
        report.len(),
        report.total_intensity
    );
    Ok(())
}
