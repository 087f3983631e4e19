// track.rs - In-memory wiggle signal track

use std::collections::BTreeMap;

/// A single wiggle data item covering `[start, start + span)` (1-based)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalRecord {
    pub start: u64,
    pub span: u64,
    pub value: f64,
}

impl SignalRecord {
    pub fn new(start: u64, span: u64, value: f64) -> Self {
        Self { start, span, value }
    }

    /// Exclusive end coordinate
    pub fn end(&self) -> u64 {
        self.start + self.span
    }
}

/// Signal records for one chromosome, sorted by start
#[derive(Debug, Clone, Default)]
pub struct ChromSignal {
    pub records: Vec<SignalRecord>,
}

impl ChromSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: SignalRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort records by start coordinate
    pub fn sort(&mut self) {
        self.records.sort_by_key(|r| r.start);
    }

    /// Records overlapping the closed interval `[start, end]`.
    ///
    /// Records are sorted and disjoint once [`SignalTrack::finalize`] has run,
    /// so both starts and ends are monotonic and two binary searches bound
    /// the slice.
    pub fn window(&self, start: u64, end: u64) -> &[SignalRecord] {
        let lo = self.records.partition_point(|r| r.end() <= start);
        let hi = self.records.partition_point(|r| r.start <= end);
        if lo >= hi {
            &[]
        } else {
            &self.records[lo..hi]
        }
    }
}

/// Genome-wide signal track keyed by chromosome name
#[derive(Debug, Clone, Default)]
pub struct SignalTrack {
    pub chroms: BTreeMap<String, ChromSignal>,
}

impl SignalTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to a chromosome, creating it on first use
    pub fn push(&mut self, chrom: &str, record: SignalRecord) {
        if let Some(signal) = self.chroms.get_mut(chrom) {
            signal.push(record);
        } else {
            let mut signal = ChromSignal::new();
            signal.push(record);
            self.chroms.insert(chrom.to_string(), signal);
        }
    }

    pub fn chromosome(&self, name: &str) -> Option<&ChromSignal> {
        self.chroms.get(name)
    }

    pub fn has_chromosome(&self, name: &str) -> bool {
        self.chroms.contains_key(name)
    }

    /// Chromosome names in sorted order
    pub fn chromosomes(&self) -> Vec<&str> {
        self.chroms.keys().map(|s| s.as_str()).collect()
    }

    pub fn total_records(&self) -> usize {
        self.chroms.values().map(|c| c.len()).sum()
    }

    /// Sort every chromosome and reject overlapping records; called once
    /// loading is complete. Lookups rely on records being disjoint.
    pub fn finalize(&mut self) -> Result<(), String> {
        for (chrom, signal) in self.chroms.iter_mut() {
            signal.sort();
            if let Some(pair) = signal.records.windows(2).find(|w| w[1].start < w[0].end()) {
                return Err(format!(
                    "Overlapping wiggle records on {}: {}-{} and {}-{}",
                    chrom,
                    pair[0].start,
                    pair[0].end() - 1,
                    pair[1].start,
                    pair[1].end() - 1
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrom_with(starts: &[u64]) -> ChromSignal {
        let mut signal = ChromSignal::new();
        for &s in starts {
            signal.push(SignalRecord::new(s, 1, s as f64));
        }
        signal.sort();
        signal
    }

    #[test]
    fn test_window_slices_overlapping_records() {
        let signal = chrom_with(&[5, 1, 3, 9, 7]);
        let window = signal.window(3, 7);
        let starts: Vec<u64> = window.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![3, 5, 7]);
    }

    #[test]
    fn test_window_outside_data_is_empty() {
        let signal = chrom_with(&[10, 11, 12]);
        assert!(signal.window(1, 9).is_empty());
        assert!(signal.window(13, 100).is_empty());
    }

    #[test]
    fn test_window_with_span() {
        let mut signal = ChromSignal::new();
        signal.push(SignalRecord::new(1, 10, 1.0));
        signal.push(SignalRecord::new(11, 10, 2.0));
        signal.push(SignalRecord::new(21, 10, 3.0));

        // Position 10 is still inside the first record
        assert_eq!(signal.window(10, 11).len(), 2);
        assert_eq!(signal.window(21, 21)[0].value, 3.0);
    }

    #[test]
    fn test_finalize_sorts_disjoint_records() {
        let mut track = SignalTrack::new();
        track.push("chrI", SignalRecord::new(11, 10, 2.0));
        track.push("chrI", SignalRecord::new(1, 10, 1.0));
        track.finalize().unwrap();

        let starts: Vec<u64> = track.chromosome("chrI").unwrap().records.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![1, 11]);
    }

    #[test]
    fn test_finalize_rejects_overlapping_records() {
        // A long record followed by points inside it
        let mut track = SignalTrack::new();
        track.push("chrI", SignalRecord::new(1, 100, 5.0));
        track.push("chrI", SignalRecord::new(50, 1, 1.0));
        track.push("chrI", SignalRecord::new(60, 1, 1.0));

        let err = track.finalize().unwrap_err();
        assert!(err.contains("chrI"));
        assert!(err.contains("1-100"));
        assert!(err.contains("50-50"));
    }

    #[test]
    fn test_finalize_rejects_duplicate_positions() {
        let mut track = SignalTrack::new();
        track.push("chrII", SignalRecord::new(7, 1, 1.0));
        track.push("chrII", SignalRecord::new(7, 1, 2.0));
        assert!(track.finalize().unwrap_err().contains("chrII"));
    }

    #[test]
    fn test_track_push_and_counts() {
        let mut track = SignalTrack::new();
        track.push("chrII", SignalRecord::new(2, 1, 0.5));
        track.push("chrI", SignalRecord::new(1, 1, 0.1));
        track.push("chrI", SignalRecord::new(2, 1, 0.2));

        assert_eq!(track.chromosomes(), vec!["chrI", "chrII"]);
        assert_eq!(track.total_records(), 3);
        assert!(track.has_chromosome("chrII"));
        assert!(!track.has_chromosome("chrIII"));
    }
}
