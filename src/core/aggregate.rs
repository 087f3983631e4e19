// aggregate.rs - Mean signal by relative position

use crate::core::profile::ProfileSet;
use std::collections::BTreeMap;

/// Mean signal per relative position, ascending by position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeanProfile {
    pub positions: Vec<u32>,
    pub means: Vec<f64>,
    pub counts: Vec<usize>,
}

impl MeanProfile {
    /// Mean over the rows of every profile in the set
    pub fn from_profiles(set: &ProfileSet) -> Self {
        mean_by_position(set.rows().map(|(_, position, signal)| (position, signal)))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `(position, mean)` pairs as floats, ready for plotting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.positions
            .iter()
            .zip(self.means.iter())
            .map(|(&p, &m)| (p as f64, m))
            .collect()
    }
}

/// Group `(position, signal)` rows by position and average them.
///
/// Non-finite signals are ignored. The result does not depend on row order.
pub fn mean_by_position<I>(rows: I) -> MeanProfile
where
    I: IntoIterator<Item = (u32, f64)>,
{
    let mut sums: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for (position, signal) in rows {
        if !signal.is_finite() {
            continue;
        }
        let entry = sums.entry(position).or_insert((0.0, 0));
        entry.0 += signal;
        entry.1 += 1;
    }

    let mut profile = MeanProfile::default();
    for (position, (sum, count)) in sums {
        profile.positions.push(position);
        profile.means.push(sum / count as f64);
        profile.counts.push(count);
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::OrfProfile;
    use crate::data::Strand;

    #[test]
    fn test_mean_by_position() {
        let rows = vec![(1, 1.0), (2, 10.0), (1, 3.0), (2, 20.0), (3, 5.0)];
        let mean = mean_by_position(rows);
        assert_eq!(mean.positions, vec![1, 2, 3]);
        assert_eq!(mean.means, vec![2.0, 15.0, 5.0]);
        assert_eq!(mean.counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_mean_is_order_independent() {
        let rows: Vec<(u32, f64)> = (0..300)
            .map(|i| ((i % 7) as u32 + 1, (i as f64 * 0.37).sin() * 10.0))
            .collect();
        let mut reversed = rows.clone();
        reversed.reverse();
        let mut shuffled = rows.clone();
        shuffled.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let forward = mean_by_position(rows);
        for other in [mean_by_position(reversed), mean_by_position(shuffled)] {
            assert_eq!(forward.positions, other.positions);
            assert_eq!(forward.counts, other.counts);
            for (a, b) in forward.means.iter().zip(other.means.iter()) {
                assert!((a - b).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_non_finite_ignored() {
        let mean = mean_by_position(vec![(1, f64::NAN), (1, 2.0)]);
        assert_eq!(mean.means, vec![2.0]);
        assert_eq!(mean.counts, vec![1]);
    }

    #[test]
    fn test_empty_rows() {
        let mean = mean_by_position(Vec::new());
        assert!(mean.is_empty());
        assert!(mean.points().is_empty());
    }

    #[test]
    fn test_from_profiles() {
        let profile = |id: &str, values: Vec<f64>| OrfProfile {
            orf_id: id.to_string(),
            chrom: "chrI".to_string(),
            strand: Strand::Watson,
            truncated: false,
            values,
        };
        let set = ProfileSet {
            bins: 3,
            profiles: vec![profile("a", vec![1.0, 2.0, 3.0]), profile("b", vec![3.0, 4.0, 5.0])],
            ..ProfileSet::default()
        };
        let mean = MeanProfile::from_profiles(&set);
        assert_eq!(mean.points(), vec![(1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]);
    }
}
