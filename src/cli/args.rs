// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// signal-at-orf - ChIP-seq signal at every ORF, rescaled to a fixed number of bins
pub struct Args {
    /// wiggle file, or directory with one wiggle file per chromosome
    #[argh(option)]
    pub wiggle: Option<String>,

    /// GFF3 annotation with ORF coordinates
    #[argh(option)]
    pub gff: Option<String>,

    /// output TSV with one row per ORF per bin (gene, position, signal)
    #[argh(option)]
    pub output: Option<String>,

    /// number of bins each ORF window is rescaled to (default: 2000)
    #[argh(option, default = "crate::core::DEFAULT_BINS")]
    pub bins: usize,

    /// GFF feature type to treat as ORF; repeatable, "*" keeps all (default: gene)
    #[argh(option)]
    pub feature_type: Vec<String>,

    /// minimum fraction of window bases with signal (0.0-1.0, default: 0.0 = no filter)
    #[argh(option, default = "0.0")]
    pub min_coverage: f64,

    /// minimum ORF length in bases (default: 1)
    #[argh(option, default = "1")]
    pub min_length: u64,

    /// include only chromosomes matching regex pattern
    #[argh(option)]
    pub include_chroms: Option<String>,

    /// exclude chromosomes matching regex pattern
    #[argh(option)]
    pub exclude_chroms: Option<String>,

    /// also write mean signal by position to this TSV
    #[argh(option)]
    pub mean_output: Option<String>,

    /// write a JSON run summary to this file
    #[argh(option)]
    pub summary: Option<String>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// hide progress bars
    #[argh(switch)]
    pub quiet: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// print version and exit
    #[argh(switch)]
    pub version: bool,
}
