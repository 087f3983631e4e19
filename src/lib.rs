// lib.rs - signal_at_orf library root

//! # signal_at_orf - ChIP-seq signal aggregated over ORFs genome-wide
//!
//! Reads a wiggle signal track and a GFF annotation, extracts the signal over
//! every ORF flanked by half its length on each side, rescales each profile to
//! a fixed number of bins and averages across ORFs by relative position.
//!
//! ## Features
//!
//! - **Wiggle input**: single files (`variableStep`/`fixedStep`) or a directory
//!   holding one file per chromosome
//! - **Length-invariant profiles**: every ORF maps onto the same number of bins
//! - **Strand aware**: Crick ORFs are reversed so bin 1 is always upstream
//! - **Plotting**: mean-signal curves of one or two runs rendered to SVG
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use signal_at_orf::prelude::*;
//!
//! let track = SignalTrack::load(std::path::Path::new("wiggle/"), false)?;
//! let annotation = OrfAnnotation::from_gff(
//!     std::path::Path::new("genes.gff"),
//!     &["gene".to_string()],
//! )?;
//!
//! let profiles = compute_profiles(&track, &annotation.orfs, &ProfileSettings::default());
//! write_profiles("signal_at_orf.tsv", &profiles)?;
//!
//! let mean = MeanProfile::from_profiles(&profiles);
//! println!("{} positions", mean.len());
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod plot;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{compute_profiles, mean_by_position, profile_orf};
    pub use crate::core::{FlankedWindow, MeanProfile, OrfProfile, ProfileSet, ProfileSettings};
    pub use crate::data::{Orf, OrfAnnotation, ReferenceGenome, SignalTrack, Strand};
    pub use crate::output::{format_elapsed, write_means, write_profiles, RunSummary};
    pub use crate::plot::{plot_files, render_svg, PlotOptions, PlotSeries};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use crate::core::{MeanProfile, ProfileSet, ProfileSettings};
pub use data::{Orf, OrfAnnotation, SignalTrack};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "signal-at-orf v{} - ChIP-seq signal at ORFs genome-wide",
        VERSION
    )
}
