// mod.rs - Input file loaders

pub mod gff;
pub mod wiggle;

pub use gff::ANY_FEATURE;
pub use wiggle::parse_wiggle;
