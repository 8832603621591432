use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Fraction of the one-sided spectrum kept by [`smooth`].
pub const SMOOTHING_CUTOFF: f64 = 0.10;

/// Low-pass smooth a day-indexed signal, treating it as one period of a periodic function.
///
/// When `enabled` is false the input is returned unchanged.
pub fn smooth(signal: &[f64], enabled: bool) -> Vec<f64> {
    smooth_to_len(signal, signal.len(), enabled)
}

/// Like [`smooth`], but evaluates the smoothed curve at `target_len` evenly spaced samples.
///
/// Used when a signal recorded for one year is drawn on a year with a different day count.
/// The zero-frequency term is always retained, so a constant input stays constant at any
/// length.
pub fn smooth_to_len(signal: &[f64], target_len: usize, enabled: bool) -> Vec<f64> {
    if !enabled {
        return signal.to_vec();
    }
    let n = signal.len();
    if n == 0 || target_len == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();

    let mut spectrum: Vec<Complex<f64>> = signal.iter().map(|&v| Complex::new(v, 0.0)).collect();
    planner.plan_fft_forward(n).process(&mut spectrum);

    let one_sided = n / 2 + 1;
    let keep = ((one_sided as f64 * SMOOTHING_CUTOFF) as usize).max(1);

    let m = target_len;
    let mut out = vec![Complex::new(0.0, 0.0); m];
    out[0] = Complex::new(spectrum[0].re, 0.0);
    for k in 1..keep.min(one_sided) {
        if k > m - k {
            break;
        }
        if k == m - k || 2 * k == n {
            // Self-conjugate bin on either side: contributes once, real part only.
            out[k] = Complex::new(spectrum[k].re, 0.0);
        } else {
            out[k] = spectrum[k];
            out[m - k] = spectrum[k].conj();
        }
    }

    planner.plan_fft_inverse(m).process(&mut out);

    let scale = 1.0 / n as f64;
    out.iter().map(|c| c.re * scale).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/signal/smooth.rs"]
mod tests;
