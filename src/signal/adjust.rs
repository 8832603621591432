/// What [`repair_length`] did to a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repair {
    /// Length already matched.
    Unchanged,
    /// Extended by repeating the last value.
    Padded {
        /// Original length.
        from: usize,
        /// Repaired length.
        to: usize,
    },
    /// Surplus values dropped from the end.
    Truncated {
        /// Original length.
        from: usize,
        /// Repaired length.
        to: usize,
    },
}

/// Reconcile a day-indexed signal with the target year's day count.
///
/// Surplus values are truncated; a short signal is padded by repeating its last value.
/// An empty signal stays empty, since there is no edge value to repeat.
pub fn repair_length(signal: &[f64], target: usize) -> (Vec<f64>, Repair) {
    let from = signal.len();
    if from == target || from == 0 {
        return (signal.to_vec(), Repair::Unchanged);
    }
    if from > target {
        return (
            signal[..target].to_vec(),
            Repair::Truncated { from, to: target },
        );
    }
    let mut out = signal.to_vec();
    out.resize(target, signal[from - 1]);
    (out, Repair::Padded { from, to: target })
}

/// [`repair_length`] that reports a mismatch as a warning and returns the repaired signal.
pub fn fit_to_days(name: &str, signal: &[f64], target: usize) -> Vec<f64> {
    let (out, repair) = repair_length(signal, target);
    if repair != Repair::Unchanged {
        tracing::warn!(
            signal = name,
            actual = signal.len(),
            expected = target,
            "{name} data length ({}) differs from expected length ({target}), {}",
            signal.len(),
            match repair {
                Repair::Padded { .. } => "padding with last value",
                _ => "truncating",
            }
        );
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/signal/adjust.rs"]
mod tests;
