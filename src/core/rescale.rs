// rescale.rs - Length-invariant rescaling of window signal to fixed bins

use crate::core::window::FlankedWindow;
use crate::data::{SignalRecord, Strand};

/// Signal at a continuous coordinate, where base `p` spans `[p, p + 1)`.
///
/// Inside a record the record value is returned; between records the value
/// is interpolated linearly from the previous record's right edge to the
/// next record's left edge; beyond the outermost records it is clamped.
/// Returns `None` for an empty slice.
pub fn signal_at(records: &[SignalRecord], x: f64) -> Option<f64> {
    let idx = records.partition_point(|r| (r.start as f64) <= x);
    let prev = if idx > 0 { records.get(idx - 1) } else { None };
    let next = records.get(idx);

    match (prev, next) {
        (Some(p), _) if x < p.end() as f64 => Some(p.value),
        (Some(p), Some(n)) => {
            let left = p.end() as f64;
            let right = n.start as f64;
            if right <= left {
                return Some(n.value);
            }
            let t = (x - left) / (right - left);
            Some(p.value + t * (n.value - p.value))
        }
        (Some(p), None) => Some(p.value),
        (None, Some(n)) => Some(n.value),
        (None, None) => None,
    }
}

/// Rescale the signal over `window` to exactly `bins` values.
///
/// Bin `i` samples the signal at the centre of its share of the full window
/// grid. Crick profiles are reversed so the first bin is always upstream.
pub fn rescale(
    records: &[SignalRecord],
    window: &FlankedWindow,
    strand: Strand,
    bins: usize,
) -> Option<Vec<f64>> {
    if records.is_empty() || bins == 0 {
        return None;
    }

    let bin_width = window.grid_len as f64 / bins as f64;
    let mut values = Vec::with_capacity(bins);
    for i in 0..bins {
        let x = window.grid_start as f64 + (i as f64 + 0.5) * bin_width;
        values.push(signal_at(records, x)?);
    }

    if strand == Strand::Crick {
        values.reverse();
    }
    Some(values)
}

/// Fraction of the (clamped) window covered by records
pub fn coverage(records: &[SignalRecord], window: &FlankedWindow) -> f64 {
    let window_end = window.end + 1;
    let covered: u64 = records
        .iter()
        .map(|r| {
            let lo = r.start.max(window.start);
            let hi = r.end().min(window_end);
            hi.saturating_sub(lo)
        })
        .sum();
    covered as f64 / window.clamped_len() as f64
}
