// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::ProfileSettings;
use regex::Regex;
use std::path::Path;

/// Feature type used when none is given
pub const DEFAULT_FEATURE_TYPE: &str = "gene";

#[derive(Debug)]
pub struct ValidationResult {
    pub settings: ProfileSettings,
    pub feature_types: Vec<String>,
    pub include_chroms_regex: Option<Regex>,
    pub exclude_chroms_regex: Option<Regex>,
}

fn compile(pattern: Option<&String>, name: &str) -> Result<Option<Regex>, String> {
    pattern
        .map(|p| Regex::new(p).map_err(|e| format!("Invalid {} regex: {}", name, e)))
        .transpose()
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let wiggle = args.wiggle.as_ref().ok_or("--wiggle is required")?;
    args.gff.as_ref().ok_or("--gff is required")?;
    if !args.dry_run {
        args.output.as_ref().ok_or("--output is required")?;
    }

    if !Path::new(wiggle).exists() {
        return Err(format!("Wiggle path '{}' does not exist", wiggle));
    }

    if args.bins < 2 {
        return Err(format!("--bins must be at least 2 (got {})", args.bins));
    }
    if !(0.0..=1.0).contains(&args.min_coverage) {
        return Err("Minimum coverage must be between 0.0 and 1.0".to_string());
    }

    let feature_types = if args.feature_type.is_empty() {
        vec![DEFAULT_FEATURE_TYPE.to_string()]
    } else {
        args.feature_type.clone()
    };

    let include_chroms_regex = compile(args.include_chroms.as_ref(), "include_chroms")?;
    let exclude_chroms_regex = compile(args.exclude_chroms.as_ref(), "exclude_chroms")?;

    Ok(ValidationResult {
        settings: ProfileSettings {
            bins: args.bins,
            min_coverage: args.min_coverage,
            min_length: args.min_length,
            quiet: args.quiet,
        },
        feature_types,
        include_chroms_regex,
        exclude_chroms_regex,
    })
}
