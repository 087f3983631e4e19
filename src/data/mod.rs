// mod.rs - Data structures module

pub mod annotation;
pub mod genome;
pub mod loaders;
pub mod track;

// Re-export main types for convenience
pub use annotation::{Orf, OrfAnnotation, Strand};
pub use genome::ReferenceGenome;
pub use track::{ChromSignal, SignalRecord, SignalTrack};
