// mod.rs - Core logic module

pub mod aggregate;
pub mod profile;
pub mod rescale;
pub mod window;

// Re-export main types for convenience
pub use aggregate::{mean_by_position, MeanProfile};
pub use profile::{
    compute_profiles, profile_orf, OrfProfile, ProfileSet, ProfileSettings, SkipCounts, SkipReason,
    DEFAULT_BINS,
};
pub use rescale::{coverage, rescale, signal_at};
pub use window::FlankedWindow;
