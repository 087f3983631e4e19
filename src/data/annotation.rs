// annotation.rs - ORF annotation structures

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Strand of an ORF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    /// Forward strand (`+`, or unstranded)
    Watson,
    /// Reverse strand (`-`)
    Crick,
}

impl Strand {
    pub fn from_symbol(symbol: &str) -> Self {
        if symbol.trim() == "-" {
            Strand::Crick
        } else {
            Strand::Watson
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Strand::Watson => "+",
            Strand::Crick => "-",
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An open reading frame with 1-based, inclusive coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orf {
    pub id: String,
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
}

impl Orf {
    pub fn new(id: &str, chrom: &str, start: u64, end: u64, strand: Strand) -> Self {
        Self {
            id: id.to_string(),
            chrom: chrom.to_string(),
            start,
            end,
            strand,
        }
    }

    /// ORF length in bases
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// ORFs loaded from a genome annotation
#[derive(Debug, Clone, Default)]
pub struct OrfAnnotation {
    pub orfs: Vec<Orf>,
}

impl OrfAnnotation {
    pub fn new(orfs: Vec<Orf>) -> Self {
        Self { orfs }
    }

    pub fn len(&self) -> usize {
        self.orfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orfs.is_empty()
    }

    /// Distinct chromosome names in sorted order
    pub fn chromosomes(&self) -> Vec<&str> {
        self.orfs
            .iter()
            .map(|o| o.chrom.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Keep only ORFs on chromosomes passing the include/exclude patterns
    pub fn filter_chromosomes(&mut self, include: Option<&Regex>, exclude: Option<&Regex>) {
        if include.is_none() && exclude.is_none() {
            return;
        }
        let initial = self.orfs.len();

        self.orfs.retain(|orf| {
            if let Some(regex) = include {
                if !regex.is_match(&orf.chrom) {
                    return false;
                }
            }
            if let Some(regex) = exclude {
                if regex.is_match(&orf.chrom) {
                    return false;
                }
            }
            true
        });

        let kept = self.orfs.len();
        if initial != kept {
            println!(
                "Chromosome filters: kept {} ORFs (removed {})",
                kept,
                initial - kept
            );
        }
    }
}
