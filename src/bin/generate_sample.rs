use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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

/// Build a report in the style of a UV-Vis instrument export: a free-text
/// preamble, one `SCAN` table per sample (comma separated, one column-title
/// line), a whitespace-separated calibration table with a truncated last row,
/// and a trailer. Lines end in CRLF.
fn build_report(rng: &mut SimpleRng) -> Result<String> {
    let samples = [
        ("Sample_A", [(260.0, 12.0, 0.8), (280.0, 10.0, 0.5)]),
        ("Sample_B", [(230.0, 15.0, 0.6), (340.0, 20.0, 0.4)]),
        ("Sample_C", [(250.0, 8.0, 0.9), (410.0, 25.0, 0.3)]),
    ];
    let wavelengths: Vec<f64> = (0..60).map(|i| 200.0 + i as f64 * 5.0).collect();

    let mut out = String::new();
    write!(out, "Instrument: UV-2600\r\n")?;
    write!(out, "Method: absorbance scan, 1 nm slit\r\n\r\n")?;

    for (name, peaks) in &samples {
        write!(out, "SCAN {name}\r\n")?;
        write!(out, "Wavelength (nm), Absorbance\r\n")?;
        for &wl in &wavelengths {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(wl, mu, sigma, amp))
                .sum();
            let abs = signal + rng.gauss(0.0, 0.003);
            write!(out, "{wl:.1}, {abs:.5}\r\n")?;
        }
        write!(out, "\r\n")?;
    }

    write!(out, "CALIBRATION standards\r\n")?;
    for (i, conc) in [0.0, 0.5, 1.0, 2.0].iter().enumerate() {
        let a260 = 0.02 * conc + rng.gauss(0.0, 0.001);
        let a280 = 0.011 * conc + rng.gauss(0.0, 0.001);
        if i == 3 {
            // Last standard lost its 280 nm reading.
            write!(out, "{conc:.2}\t{a260:.5}\r\n")?;
        } else {
            write!(out, "{conc:.2}\t{a260:.5}\t{a280:.5}\r\n")?;
        }
    }
    write!(out, "End of report\r\n")?;

    Ok(out)
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_report.txt"));

    let mut rng = SimpleRng::new(42);
    let report = build_report(&mut rng)?;
    std::fs::write(&output_path, &report)
        .with_context(|| format!("writing {}", output_path.display()))?;

    log::info!("wrote {} bytes", report.len());
    println!(
        "Wrote sample report to {} (try: datablock {} SCAN --instance 2 --skip 1)",
        output_path.display(),
        output_path.display()
    );
    Ok(())
}
