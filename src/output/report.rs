// report.rs - Run summary and timing helpers

use crate::core::{ProfileSet, SkipCounts};
use crate::data::ReferenceGenome;
use serde::{Deserialize, Serialize};
use std::fs;

/// Machine-readable summary of a profiling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub version: String,
    pub generated: String,
    pub wiggle: String,
    pub gff: String,
    pub bins: usize,
    pub orfs_loaded: usize,
    pub orfs_profiled: usize,
    pub orfs_truncated: usize,
    pub skipped: SkipCounts,
    pub track_reference: ReferenceGenome,
    pub annotation_reference: ReferenceGenome,
    pub missing_chromosomes: Vec<String>,
    pub elapsed_seconds: f64,
}

impl RunSummary {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        wiggle: &str,
        gff: &str,
        orfs_loaded: usize,
        set: &ProfileSet,
        track_reference: ReferenceGenome,
        annotation_reference: ReferenceGenome,
        missing_chromosomes: Vec<String>,
        elapsed_seconds: f64,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            wiggle: wiggle.to_string(),
            gff: gff.to_string(),
            bins: set.bins,
            orfs_loaded,
            orfs_profiled: set.len(),
            orfs_truncated: set.truncated,
            skipped: set.skipped.clone(),
            track_reference,
            annotation_reference,
            missing_chromosomes,
            elapsed_seconds,
        }
    }
}

/// Write the run summary as pretty JSON
pub fn write_run_summary(file_path: &str, summary: &RunSummary) -> Result<(), String> {
    super::ensure_parent_dir(file_path)?;
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| format!("Failed to serialize run summary: {}", e))?;
    fs::write(file_path, json)
        .map_err(|e| format!("Failed to write run summary '{}': {}", file_path, e))?;
    println!("📋 Run summary written to: {}", file_path);
    Ok(())
}

/// Human-readable elapsed time: seconds below a minute, minutes below an hour
pub fn format_elapsed(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.1} sec.", seconds)
    } else if seconds < 3600.0 {
        format!("{:.1} min.", seconds / 60.0)
    } else {
        format!("{:.1} hr.", seconds / 3600.0)
    }
}
