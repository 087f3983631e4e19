// mod.rs - Mean signal plotting from profile tables

pub mod svg;

use crate::core::{mean_by_position, MeanProfile};
use crate::output::{ensure_parent_dir, write_means};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

pub use svg::{render_svg, PlotOptions, PlotSeries};

/// Read `(position, signal)` rows from a profile TSV.
///
/// Requires a header with `position` and `signal` columns; any other columns
/// are ignored. Lines starting with `#` are comments.
pub fn load_profile_table(path: &Path) -> Result<Vec<(u32, f64)>, String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .comment(Some(b'#'))
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Failed to open TSV file '{}': {}", path.display(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read header of '{}': {}", path.display(), e))?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| format!("Column '{}' not found in '{}'", name, path.display()))
    };
    let position_idx = column("position")?;
    let signal_idx = column("signal")?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2;
        let record = record
            .map_err(|e| format!("Failed to read line {} of '{}': {}", line, path.display(), e))?;
        let field = |i: usize| record.get(i).map(str::trim).unwrap_or_default();

        let position = field(position_idx).parse::<u32>().map_err(|_| {
            format!(
                "Invalid position '{}' at line {} of '{}'",
                field(position_idx),
                line,
                path.display()
            )
        })?;
        let signal = field(signal_idx).parse::<f64>().map_err(|_| {
            format!(
                "Invalid signal '{}' at line {} of '{}'",
                field(signal_idx),
                line,
                path.display()
            )
        })?;
        rows.push((position, signal));
    }

    Ok(rows)
}

/// Load a profile table and average it by position
pub fn load_mean_profile(path: &Path) -> Result<MeanProfile, String> {
    let rows = load_profile_table(path)?;
    let mean = mean_by_position(rows);
    if mean.is_empty() {
        return Err(format!("No signal rows in '{}'", path.display()));
    }
    Ok(mean)
}

/// Plot one or two profile tables as mean-signal curves and save the SVG.
///
/// With `means_output`, the mean tables are written next to it; when two
/// inputs are given, the second table gets a `.b` suffix before the extension.
pub fn plot_files(
    input_a: &str,
    input_b: Option<&str>,
    output: &str,
    options: &PlotOptions,
    means_output: Option<&str>,
) -> Result<(), String> {
    println!("📊 Computing average signal by position for data in file(s):");
    println!("   {}", input_a);
    if let Some(b) = input_b {
        println!("   {}", b);
    }

    let mut means = vec![(input_a, load_mean_profile(Path::new(input_a))?)];
    if let Some(b) = input_b {
        means.push((b, load_mean_profile(Path::new(b))?));
    }

    if let Some(means_path) = means_output {
        for (idx, (_, mean)) in means.iter().enumerate() {
            let path = if idx == 0 {
                means_path.to_string()
            } else {
                suffixed_path(means_path, "b")
            };
            write_means(&path, mean)?;
        }
    }

    println!("🎨 Plotting...");
    let series: Vec<PlotSeries> = means
        .iter()
        .map(|(label, mean)| PlotSeries::new(label, mean.points()))
        .collect();
    let svg = render_svg(&series, options);

    ensure_parent_dir(output)?;
    fs::write(output, svg).map_err(|e| format!("Failed to write plot '{}': {}", output, e))?;
    println!("✅ Plot written to: {}", output);
    Ok(())
}

/// `means.tsv` + `b` -> `means.b.tsv`
fn suffixed_path(path: &str, suffix: &str) -> String {
    let p = Path::new(path);
    match (p.file_stem().and_then(|s| s.to_str()), p.extension().and_then(|s| s.to_str())) {
        (Some(stem), Some(ext)) => p
            .with_file_name(format!("{}.{}.{}", stem, suffix, ext))
            .display()
            .to_string(),
        _ => format!("{}.{}", path, suffix),
    }
}
