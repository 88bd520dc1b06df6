pub mod structs;

mod aligner;
pub use aligner::SequenceAligner;

mod scoring;
pub use scoring::Judge;

mod needleman_wunsch;
pub(crate) use needleman_wunsch::{fill_cache, traceback};
