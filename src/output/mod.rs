// mod.rs - Output writers module

pub mod report;

use crate::core::{MeanProfile, ProfileSet};
use csv::WriterBuilder;
use std::fs::create_dir_all;
use std::path::Path;

pub use report::{format_elapsed, write_run_summary, RunSummary};

/// Ensure parent directory exists before creating file
pub(crate) fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!("Failed to create parent directory '{}': {}", parent.display(), e)
            })?;
        }
    }
    Ok(())
}

fn tsv_writer(file_path: &str) -> Result<csv::Writer<std::fs::File>, String> {
    ensure_parent_dir(file_path)?;
    WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))
}

/// Write per-ORF profiles: one `gene position signal` row per ORF per bin
pub fn write_profiles(file_path: &str, set: &ProfileSet) -> Result<usize, String> {
    let mut writer = tsv_writer(file_path)?;
    writer
        .write_record(["gene", "position", "signal"])
        .map_err(|e| format!("Write error: {}", e))?;

    let mut rows = 0;
    for (gene, position, signal) in set.rows() {
        writer
            .write_record([gene.to_string(), position.to_string(), signal.to_string()])
            .map_err(|e| format!("Write error: {}", e))?;
        rows += 1;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ {} signal rows written to: {}", rows, file_path);
    Ok(rows)
}

/// Write mean signal by position
pub fn write_means(file_path: &str, mean: &MeanProfile) -> Result<(), String> {
    let mut writer = tsv_writer(file_path)?;
    writer
        .write_record(["position", "signal", "n"])
        .map_err(|e| format!("Write error: {}", e))?;

    for ((position, signal), count) in mean
        .positions
        .iter()
        .zip(mean.means.iter())
        .zip(mean.counts.iter())
    {
        writer
            .write_record([position.to_string(), signal.to_string(), count.to_string()])
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Mean signal written to: {}", file_path);
    Ok(())
}
