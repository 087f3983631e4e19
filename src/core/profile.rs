// profile.rs - Per-ORF signal extraction

use crate::core::rescale::{coverage, rescale};
use crate::core::window::FlankedWindow;
use crate::data::{Orf, SignalTrack, Strand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Default bins: 1000 for the ORF body plus 500 for each flank
pub const DEFAULT_BINS: usize = 2000;

/// Settings for profile extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub bins: usize,
    pub min_coverage: f64,
    pub min_length: u64,
    pub quiet: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            min_coverage: 0.0,
            min_length: 1,
            quiet: false,
        }
    }
}

/// Why an ORF produced no profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingChromosome,
    NoSignal,
    LowCoverage,
    TooShort,
}

/// Skipped ORF counts per reason
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipCounts {
    pub missing_chromosome: usize,
    pub no_signal: usize,
    pub low_coverage: usize,
    pub too_short: usize,
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingChromosome => self.missing_chromosome += 1,
            SkipReason::NoSignal => self.no_signal += 1,
            SkipReason::LowCoverage => self.low_coverage += 1,
            SkipReason::TooShort => self.too_short += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_chromosome + self.no_signal + self.low_coverage + self.too_short
    }
}

/// Rescaled signal profile of one ORF
#[derive(Debug, Clone, PartialEq)]
pub struct OrfProfile {
    pub orf_id: String,
    pub chrom: String,
    pub strand: Strand,
    pub truncated: bool,
    pub values: Vec<f64>,
}

/// All profiles of a run, in annotation order
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    pub bins: usize,
    pub profiles: Vec<OrfProfile>,
    pub skipped: SkipCounts,
    pub truncated: usize,
}

impl ProfileSet {
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// `(orf_id, position, signal)` rows with 1-based positions
    pub fn rows(&self) -> impl Iterator<Item = (&str, u32, f64)> + '_ {
        self.profiles.iter().flat_map(|profile| {
            profile
                .values
                .iter()
                .enumerate()
                .map(move |(i, &v)| (profile.orf_id.as_str(), i as u32 + 1, v))
        })
    }

    /// Always `bins * profiles`
    pub fn row_count(&self) -> usize {
        self.bins * self.profiles.len()
    }
}

/// Extract and rescale the signal for a single ORF
pub fn profile_orf(
    track: &SignalTrack,
    orf: &Orf,
    settings: &ProfileSettings,
) -> Result<OrfProfile, SkipReason> {
    if orf.length() < settings.min_length {
        return Err(SkipReason::TooShort);
    }

    let signal = track
        .chromosome(&orf.chrom)
        .ok_or(SkipReason::MissingChromosome)?;

    let window = FlankedWindow::around(orf);
    let records = signal.window(window.start, window.end);
    if records.is_empty() {
        return Err(SkipReason::NoSignal);
    }

    if settings.min_coverage > 0.0 && coverage(records, &window) < settings.min_coverage {
        return Err(SkipReason::LowCoverage);
    }

    let values =
        rescale(records, &window, orf.strand, settings.bins).ok_or(SkipReason::NoSignal)?;

    Ok(OrfProfile {
        orf_id: orf.id.clone(),
        chrom: orf.chrom.clone(),
        strand: orf.strand,
        truncated: window.truncated,
        values,
    })
}

/// Compute profiles for every ORF in parallel
pub fn compute_profiles(track: &SignalTrack, orfs: &[Orf], settings: &ProfileSettings) -> ProfileSet {
    let start = Instant::now();
    if !settings.quiet {
        println!(
            "🔄 Computing signal at {} ORFs ({} bins per ORF)...",
            orfs.len(),
            settings.bins
        );
    }

    let pb = if settings.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(orfs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    };

    let update_interval = std::cmp::max(1, orfs.len() / 100);
    let progress_counter = Arc::new(AtomicUsize::new(0));

    let outcomes: Vec<Result<OrfProfile, SkipReason>> = orfs
        .par_iter()
        .map(|orf| {
            let outcome = profile_orf(track, orf, settings);
            let count = progress_counter.fetch_add(1, Ordering::Relaxed) + 1;
            if count % update_interval == 0 {
                pb.set_position(count as u64);
            }
            outcome
        })
        .collect();
    pb.finish_and_clear();

    let mut set = ProfileSet {
        bins: settings.bins,
        ..ProfileSet::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(profile) => {
                if profile.truncated {
                    set.truncated += 1;
                }
                set.profiles.push(profile);
            }
            Err(reason) => set.skipped.record(reason),
        }
    }

    if !settings.quiet {
        println!(
            "✅ Profiled {} ORFs in {:.2}s ({} skipped)",
            set.len(),
            start.elapsed().as_secs_f64(),
            set.skipped.total()
        );
    }
    set
}
