//! Plaintext rendering of the weighting function, purely diagnostic.
//!
//! Replaces a plotted image with a fixed-width ASCII chart plus the
//! sampled values, so the artifact can live next to the CSV exports and
//! diff cleanly between runs.

use std::fmt::Write as _;
use std::path::Path;

use decklens_analysis::power::WeightParams;
use decklens_core::errors::ExportError;

/// File name of the weight-curve artifact.
pub const CURVE_FILE: &str = "power_weight_curve.txt";

const SAMPLES: usize = 21;
const BAR_WIDTH: usize = 41;

/// Sample the weight function over win rates 0..=1.
pub fn sample_curve(params: WeightParams, samples: usize) -> Vec<(f64, f64)> {
    let steps = samples.max(2) - 1;
    (0..=steps)
        .map(|i| {
            let win_rate = i as f64 / steps as f64;
            (win_rate, params.weight(win_rate))
        })
        .collect()
}

/// Render the curve as a fixed-width chart with one sampled row per line.
pub fn render_curve(params: WeightParams) -> String {
    let points = sample_curve(params, SAMPLES);
    let max_abs = points
        .iter()
        .map(|(_, w)| w.abs())
        .fold(0.0f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "weight(win_rate) = sign(win_rate - {c}) * |win_rate - {c}|^{p}",
        c = params.center,
        p = params.power,
    );
    out.push('\n');
    out.push_str("win_rate    weight  ");
    out.push_str(&" ".repeat(BAR_WIDTH / 2 - 1));
    out.push_str("-\n");

    let zero_col = BAR_WIDTH / 2;
    for (win_rate, weight) in points {
        // Scale the weight to a column offset from the zero axis.
        let offset = (weight / max_abs * zero_col as f64).round() as isize;
        let col = (zero_col as isize + offset).clamp(0, BAR_WIDTH as isize - 1) as usize;

        let mut bar = vec![b' '; BAR_WIDTH];
        bar[zero_col] = b'|';
        bar[col] = b'*';

        let _ = writeln!(
            out,
            "{win_rate:>8.2}  {weight:>8.4}  {}",
            String::from_utf8_lossy(&bar).trim_end()
        );
    }
    out
}

/// Write the weight-curve artifact into `dir`.
pub fn write_curve(dir: &Path, params: WeightParams) -> Result<(), ExportError> {
    crate::write_artifact(dir, CURVE_FILE, &render_curve(params))
}
