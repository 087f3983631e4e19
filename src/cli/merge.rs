// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::core::DEFAULT_BINS;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.wiggle.is_none() {
            self.wiggle = config.wiggle;
        }
        if self.gff.is_none() {
            self.gff = config.gff;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.mean_output.is_none() {
            self.mean_output = config.mean_output;
        }
        if self.summary.is_none() {
            self.summary = config.summary;
        }

        // Profiling (only override defaults, not explicit CLI values)
        if let Some(bins) = config.bins {
            if self.bins == DEFAULT_BINS {
                self.bins = bins;
            }
        }
        if self.feature_type.is_empty() {
            if let Some(types) = config.feature_types {
                self.feature_type = types;
            }
        }
        if let Some(min_coverage) = config.min_coverage {
            if self.min_coverage == 0.0 {
                self.min_coverage = min_coverage;
            }
        }
        if let Some(min_length) = config.min_length {
            if self.min_length == 1 {
                self.min_length = min_length;
            }
        }

        // Chromosome filtering
        if self.include_chroms.is_none() {
            self.include_chroms = config.include_chroms;
        }
        if self.exclude_chroms.is_none() {
            self.exclude_chroms = config.exclude_chroms;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.quiet && config.quiet.unwrap_or(false) {
            self.quiet = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
