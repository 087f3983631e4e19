// genome.rs - Reference genome detection from chromosome naming

use serde::{Deserialize, Serialize};
use std::fmt;

const S288C_CHROMS: [&str; 16] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI",
];

const SK1_CHROMS: [&str; 16] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16",
];

/// Yeast reference genome inferred from chromosome names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceGenome {
    /// Roman-numeral chromosomes (`chrI` .. `chrXVI`)
    S288C,
    /// Zero-padded numeric chromosomes (`chr01` .. `chr16`)
    SK1,
    Unknown,
}

impl ReferenceGenome {
    pub fn detect(chrom: &str) -> Self {
        let Some(suffix) = chrom.strip_prefix("chr") else {
            return ReferenceGenome::Unknown;
        };
        if S288C_CHROMS.contains(&suffix) {
            ReferenceGenome::S288C
        } else if SK1_CHROMS.contains(&suffix) {
            ReferenceGenome::SK1
        } else {
            ReferenceGenome::Unknown
        }
    }

    /// Majority reference across chromosome names, ignoring unrecognized ones
    pub fn detect_many<'a, I>(chroms: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (mut s288c, mut sk1) = (0usize, 0usize);
        for chrom in chroms {
            match Self::detect(chrom) {
                ReferenceGenome::S288C => s288c += 1,
                ReferenceGenome::SK1 => sk1 += 1,
                ReferenceGenome::Unknown => {}
            }
        }

        if s288c == 0 && sk1 == 0 {
            ReferenceGenome::Unknown
        } else if s288c >= sk1 {
            ReferenceGenome::S288C
        } else {
            ReferenceGenome::SK1
        }
    }
}

impl fmt::Display for ReferenceGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceGenome::S288C => write!(f, "S288C"),
            ReferenceGenome::SK1 => write!(f, "SK1"),
            ReferenceGenome::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_single() {
        assert_eq!(ReferenceGenome::detect("chrIV"), ReferenceGenome::S288C);
        assert_eq!(ReferenceGenome::detect("chrXVI"), ReferenceGenome::S288C);
        assert_eq!(ReferenceGenome::detect("chr04"), ReferenceGenome::SK1);
        assert_eq!(ReferenceGenome::detect("chrMito"), ReferenceGenome::Unknown);
        assert_eq!(ReferenceGenome::detect("chr17"), ReferenceGenome::Unknown);
        assert_eq!(ReferenceGenome::detect("IV"), ReferenceGenome::Unknown);
    }

    #[test]
    fn test_detect_many_majority() {
        let names = ["chrI", "chrII", "chrMito", "chr01"];
        assert_eq!(ReferenceGenome::detect_many(names), ReferenceGenome::S288C);

        let names = ["chr01", "chr02", "2-micron"];
        assert_eq!(ReferenceGenome::detect_many(names), ReferenceGenome::SK1);

        assert_eq!(ReferenceGenome::detect_many(Vec::<&str>::new()), ReferenceGenome::Unknown);
    }
}
