// window.rs - ORF windows flanked by half the ORF length

use crate::data::Orf;

/// Genomic window around an ORF.
///
/// `grid_start`/`grid_len` describe the full window used for rescaling, even
/// when it runs past the chromosome start; `start`/`end` are the clamped,
/// 1-based inclusive coordinates used for signal lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlankedWindow {
    pub grid_start: i64,
    pub grid_len: u64,
    pub start: u64,
    pub end: u64,
    pub flank: u64,
    pub truncated: bool,
}

impl FlankedWindow {
    /// Window covering the ORF plus `length / 2` bases on each side
    pub fn around(orf: &Orf) -> Self {
        let length = orf.length();
        let flank = length / 2;
        let grid_start = orf.start as i64 - flank as i64;
        let truncated = grid_start < 1;

        Self {
            grid_start,
            grid_len: length + 2 * flank,
            start: if truncated { 1 } else { grid_start as u64 },
            end: orf.end + flank,
            flank,
            truncated,
        }
    }

    /// Number of bases actually inside the chromosome
    pub fn clamped_len(&self) -> u64 {
        self.end - self.start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Strand;

    #[test]
    fn test_window_flanks_half_length() {
        let orf = Orf::new("a", "chrI", 1001, 2000, Strand::Watson);
        let window = FlankedWindow::around(&orf);
        assert_eq!(window.flank, 500);
        assert_eq!((window.start, window.end), (501, 2500));
        assert_eq!(window.grid_len, 2000);
        assert!(!window.truncated);
    }

    #[test]
    fn test_odd_length_flank_rounds_down() {
        let orf = Orf::new("a", "chrI", 100, 200, Strand::Crick);
        let window = FlankedWindow::around(&orf);
        assert_eq!(window.flank, 50);
        assert_eq!(window.grid_len, 201);
    }

    #[test]
    fn test_window_truncated_at_chromosome_start() {
        let orf = Orf::new("a", "chrI", 10, 109, Strand::Watson);
        let window = FlankedWindow::around(&orf);
        assert!(window.truncated);
        assert_eq!(window.grid_start, -40);
        assert_eq!(window.start, 1);
        assert_eq!(window.grid_len, 200);
        assert_eq!(window.clamped_len(), 159);
    }
}
