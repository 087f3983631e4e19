// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub wiggle: Option<String>,
    pub gff: Option<String>,
    pub output: Option<String>,
    pub mean_output: Option<String>,
    pub summary: Option<String>,

    // Profiling
    pub bins: Option<usize>,
    pub feature_types: Option<Vec<String>>,
    pub min_coverage: Option<f64>,
    pub min_length: Option<u64>,

    // Chromosome filtering
    pub include_chroms: Option<String>,
    pub exclude_chroms: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub quiet: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# signal_at_orf.toml - Configuration file for signal-at-orf
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Wiggle file, or directory holding one wiggle file per chromosome
# (files with "all" in their name are skipped)
wiggle = "/path/to/wiggle_dir"

# GFF3 annotation with ORF coordinates
gff = "/path/to/genes.gff"

# Output TSV: one row per ORF per bin (gene, position, signal)
output = "signal_at_orf.tsv"

# Mean signal by position (optional)
# mean_output = "signal_at_orf_mean.tsv"

# JSON run summary (optional)
# summary = "signal_at_orf_summary.json"

# =============================================================================
# PROFILING
# =============================================================================

# Bins per ORF window (ORF body takes the central half)
bins = 2000

# GFF feature types treated as ORFs ("*" keeps every feature)
feature_types = ["gene"]

# Minimum fraction of window bases with signal (0.0-1.0)
min_coverage = 0.0

# Minimum ORF length in bases
min_length = 1

# =============================================================================
# CHROMOSOME FILTERING
# =============================================================================

# Include only chromosomes matching regex pattern
# include_chroms = "^chr"

# Exclude chromosomes matching regex pattern
exclude_chroms = "chrMito|2-micron"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# FLAGS
# =============================================================================

# Hide progress bars
quiet = false

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
