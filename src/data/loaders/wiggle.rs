// wiggle.rs - Wiggle track loader (single file or per-chromosome directory)

use crate::data::track::{SignalRecord, SignalTrack};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Chromosome name embedded in a per-chromosome wiggle file name
const CHROM_FILE_PATTERN: &str = r"chr([IVX]+|\d+)";

/// Current wiggle declaration
enum WigSection {
    None,
    VariableStep {
        chrom: String,
        span: u64,
    },
    FixedStep {
        chrom: String,
        step: u64,
        span: u64,
        next_start: u64,
    },
}

/// Find `key=value` in a declaration line
fn declaration_value<'a>(fields: &[&'a str], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find_map(|field| field.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
}

fn parse_declaration_u64(
    fields: &[&str],
    key: &str,
    source: &str,
    line_no: usize,
) -> Result<Option<u64>, String> {
    match declaration_value(fields, key) {
        Some(raw) => raw.parse::<u64>().map(Some).map_err(|_| {
            format!(
                "{}: line {}: invalid {} value '{}'",
                source, line_no, key, raw
            )
        }),
        None => Ok(None),
    }
}

fn parse_value(raw: &str, source: &str, line_no: usize) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("{}: line {}: invalid signal value '{}'", source, line_no, raw))
}

/// Parse wiggle data from a reader into `track`.
///
/// When `fixed_chrom` is set, every record goes to that chromosome and bare
/// `position value` lines are accepted without a declaration. Returns the
/// number of records added.
pub fn parse_wiggle<R: BufRead>(
    reader: R,
    source: &str,
    fixed_chrom: Option<&str>,
    track: &mut SignalTrack,
) -> Result<usize, String> {
    let mut section = match fixed_chrom {
        Some(chrom) => WigSection::VariableStep {
            chrom: chrom.to_string(),
            span: 1,
        },
        None => WigSection::None,
    };
    let mut added = 0;

    for (line_idx, line) in reader.lines().enumerate() {
        let line_no = line_idx + 1;
        let line =
            line.map_err(|e| format!("Failed to read {} at line {}: {}", source, line_no, e))?;
        let line = line.trim();

        if line.is_empty()
            || line.starts_with("track")
            || line.starts_with("browser")
            || line.starts_with('#')
        {
            continue;
        }

        if line.starts_with("variableStep") || line.starts_with("fixedStep") {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let declared = declaration_value(&fields, "chrom");
            let chrom = match (fixed_chrom, declared) {
                (Some(chrom), _) => chrom.to_string(),
                (None, Some(chrom)) => chrom.to_string(),
                (None, None) => {
                    return Err(format!(
                        "{}: line {}: declaration missing chrom",
                        source, line_no
                    ))
                }
            };
            let span = parse_declaration_u64(&fields, "span", source, line_no)?.unwrap_or(1);
            if span == 0 {
                return Err(format!("{}: line {}: span must be positive", source, line_no));
            }

            section = if line.starts_with("variableStep") {
                WigSection::VariableStep { chrom, span }
            } else {
                let start = parse_declaration_u64(&fields, "start", source, line_no)?
                    .ok_or_else(|| format!("{}: line {}: fixedStep missing start", source, line_no))?;
                let step = parse_declaration_u64(&fields, "step", source, line_no)?
                    .ok_or_else(|| format!("{}: line {}: fixedStep missing step", source, line_no))?;
                WigSection::FixedStep {
                    chrom,
                    step,
                    span,
                    next_start: start,
                }
            };
            continue;
        }

        match &mut section {
            WigSection::None => {
                return Err(format!(
                    "{}: line {}: data line before any declaration",
                    source, line_no
                ));
            }
            WigSection::VariableStep { chrom, span } => {
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() < 2 {
                    return Err(format!(
                        "{}: line {}: expected 'position value', found {} field(s)",
                        source,
                        line_no,
                        fields.len()
                    ));
                }
                let position = fields[0].parse::<u64>().map_err(|_| {
                    format!("{}: line {}: invalid position '{}'", source, line_no, fields[0])
                })?;
                let value = parse_value(fields[1], source, line_no)?;
                if value.is_finite() {
                    track.push(chrom, SignalRecord::new(position, *span, value));
                    added += 1;
                }
            }
            WigSection::FixedStep {
                chrom,
                step,
                span,
                next_start,
            } => {
                let value = parse_value(line, source, line_no)?;
                if value.is_finite() {
                    track.push(chrom, SignalRecord::new(*next_start, *span, value));
                    added += 1;
                }
                *next_start += *step;
            }
        }
    }

    Ok(added)
}

/// Chromosome name from a per-chromosome file name, e.g. `Red1_chrIV.wig` -> `chrIV`
pub fn chrom_from_file_name(file_name: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| format!("chr{}", m.as_str()))
}

impl SignalTrack {
    /// Load a wiggle track from a file or a per-chromosome directory
    pub fn load(path: &Path, quiet: bool) -> Result<Self, String> {
        println!("📂 Reading wiggle data from: {}", path.display());
        if path.is_dir() {
            Self::from_wiggle_dir(path, quiet)
        } else if path.is_file() {
            Self::from_wiggle_file(path)
        } else {
            Err(format!("Incorrect wiggle path: '{}'", path.display()))
        }
    }

    /// Load a single (possibly multi-chromosome) wiggle file
    pub fn from_wiggle_file(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open wiggle file '{}': {}", path.display(), e))?;
        let mut track = SignalTrack::new();
        let source = path.display().to_string();
        parse_wiggle(BufReader::new(file), &source, None, &mut track)?;
        track
            .finalize()
            .map_err(|e| format!("{}: {}", source, e))?;

        println!(
            "✅ Wiggle loaded: {} chromosomes, {} records",
            track.chroms.len(),
            track.total_records()
        );
        Ok(track)
    }

    /// Load a directory holding one wiggle file per chromosome.
    ///
    /// Files whose name contains `all` hold the whole genome and are skipped.
    /// When several files name the same chromosome, only the first in sorted
    /// order is read.
    pub fn from_wiggle_dir(dir: &Path, quiet: bool) -> Result<Self, String> {
        let pattern = Regex::new(CHROM_FILE_PATTERN)
            .map_err(|e| format!("Invalid chromosome file pattern: {}", e))?;

        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| format!("Failed to read wiggle directory '{}': {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .map_err(|e| format!("Invalid progress template: {}", e))?
                    .progress_chars("#>-"),
            );
            pb
        };

        let mut track = SignalTrack::new();
        let mut skipped = 0;
        let mut chrom_files: HashMap<String, &PathBuf> = HashMap::new();

        for file_path in &files {
            pb.inc(1);
            let file_name = file_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();

            if file_name.contains("all") {
                skipped += 1;
                continue;
            }

            let chrom = chrom_from_file_name(file_name, &pattern).ok_or_else(|| {
                format!(
                    "Cannot determine chromosome name from file name '{}'",
                    file_path.display()
                )
            })?;

            if let Some(first) = chrom_files.get(&chrom) {
                pb.suspend(|| {
                    eprintln!(
                        "⚠️  Warning: '{}' and '{}' both hold {}; ignoring the latter",
                        first.display(),
                        file_path.display(),
                        chrom
                    )
                });
                continue;
            }
            chrom_files.insert(chrom.clone(), file_path);
            pb.set_message(chrom.clone());

            let file = File::open(file_path).map_err(|e| {
                format!("Failed to open wiggle file '{}': {}", file_path.display(), e)
            })?;
            let source = file_path.display().to_string();
            parse_wiggle(BufReader::new(file), &source, Some(&chrom), &mut track)?;
        }
        pb.finish_and_clear();
        track
            .finalize()
            .map_err(|e| format!("{}: {}", dir.display(), e))?;

        if skipped > 0 {
            println!("📌 Skipped {} genome-wide file(s)", skipped);
        }
        if track.chroms.is_empty() {
            return Err(format!("No wiggle data found in '{}'", dir.display()));
        }

        println!(
            "✅ Wiggle loaded: {} chromosomes, {} records",
            track.chroms.len(),
            track.total_records()
        );
        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(data: &str, fixed: Option<&str>) -> Result<SignalTrack, String> {
        let mut track = SignalTrack::new();
        parse_wiggle(Cursor::new(data), "test.wig", fixed, &mut track)?;
        track.finalize()?;
        Ok(track)
    }

    #[test]
    fn test_variable_step() {
        let data = "\
track type=wiggle_0 name=\"Red1\"
variableStep chrom=chrI span=10
100\t1.5
200\t2.3
";
        let track = parse(data, None).unwrap();
        let chr = track.chromosome("chrI").unwrap();
        assert_eq!(chr.len(), 2);
        assert_eq!(chr.records[0], SignalRecord::new(100, 10, 1.5));
        assert_eq!(chr.records[1].end(), 210);
    }

    #[test]
    fn test_fixed_step() {
        let data = "\
fixedStep chrom=chr02 start=11 step=10 span=5
1.0
2.0
3.0
";
        let track = parse(data, None).unwrap();
        let starts: Vec<u64> = track.chromosome("chr02").unwrap().records.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![11, 21, 31]);
        assert_eq!(track.chromosome("chr02").unwrap().records[2].span, 5);
    }

    #[test]
    fn test_multiple_chromosomes() {
        let data = "\
variableStep chrom=chrII
5 0.5
variableStep chrom=chrI
1 0.1
2 0.2
";
        let track = parse(data, None).unwrap();
        assert_eq!(track.chromosomes(), vec!["chrI", "chrII"]);
        assert_eq!(track.total_records(), 3);
    }

    #[test]
    fn test_non_finite_values_dropped() {
        let data = "variableStep chrom=chrI\n1 nan\n2 0.4\n3 inf\n";
        let track = parse(data, None).unwrap();
        assert_eq!(track.total_records(), 1);
    }

    #[test]
    fn test_data_before_declaration_is_error() {
        let err = parse("1\t0.5\n", None).unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn test_fixed_chrom_accepts_bare_lines() {
        let data = "track type=wiggle_0\nvariableStep chrom=ignored\n1\t0.5\n2\t0.7\n";
        let track = parse(data, Some("chrIII")).unwrap();
        assert!(track.chromosome("ignored").is_none());
        assert_eq!(track.chromosome("chrIII").unwrap().len(), 2);

        let bare = parse("1\t0.5\n", Some("chrIV")).unwrap();
        assert_eq!(bare.total_records(), 1);
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let err = parse("variableStep chrom=chrI\n1 0.5\n2 abc\n", None).unwrap_err();
        assert!(err.contains("line 3"));
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_fixed_step_requires_step() {
        assert!(parse("fixedStep chrom=chrI start=1\n1.0\n", None).is_err());
    }

    #[test]
    fn test_chrom_from_file_name() {
        let pattern = Regex::new(CHROM_FILE_PATTERN).unwrap();
        assert_eq!(chrom_from_file_name("Red1_chrIV.wig", &pattern), Some("chrIV".to_string()));
        assert_eq!(chrom_from_file_name("Red1-SK1_chr12.wig", &pattern), Some("chr12".to_string()));
        assert_eq!(chrom_from_file_name("readme.txt", &pattern), None);
    }

    #[test]
    fn test_directory_layout() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Red1_chrI.wig"),
            "track type=wiggle_0\nvariableStep chrom=chrI\n1\t0.5\n2\t0.6\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("Red1_chrII.wig"),
            "track type=wiggle_0\nvariableStep chrom=chrII\n1\t1.5\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("Red1_all_chromosomes.wig"),
            "this file is never parsed\n",
        )
        .unwrap();

        let track = SignalTrack::load(dir.path(), true).unwrap();
        assert_eq!(track.chromosomes(), vec!["chrI", "chrII"]);
        assert_eq!(track.total_records(), 3);
    }

    #[test]
    fn test_directory_with_unnamed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("signal.wig"), "1\t0.5\n").unwrap();
        let err = SignalTrack::load(dir.path(), true).unwrap_err();
        assert!(err.contains("signal.wig"));
    }

    #[test]
    fn test_duplicate_chromosome_files_keep_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x_chrI.wig"), "variableStep chrom=chrI\n1\t0.5\n").unwrap();
        fs::write(dir.path().join("y_chrI.wig"), "variableStep chrom=chrI\n1\t9.0\n").unwrap();

        let track = SignalTrack::load(dir.path(), true).unwrap();
        let records = &track.chromosome("chrI").unwrap().records;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 0.5);
    }

    #[test]
    fn test_overlapping_sections_are_rejected() {
        let data = "\
variableStep chrom=chrI span=100
1\t5.0
variableStep chrom=chrI
50\t1.0
60\t1.0
";
        let err = parse(data, None).unwrap_err();
        assert!(err.contains("Overlapping"));
        assert!(err.contains("chrI"));
    }

    #[test]
    fn test_overlapping_file_error_names_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "variableStep chrom=chrII\n5\t1.0\n5\t2.0\n").unwrap();
        let err = SignalTrack::load(file.path(), true).unwrap_err();
        assert!(err.contains(&file.path().display().to_string()));
        assert!(err.contains("chrII"));
    }

    #[test]
    fn test_missing_path_fails() {
        assert!(SignalTrack::load(Path::new("/nonexistent/wiggle"), true).is_err());
    }
}
