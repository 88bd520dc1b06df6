pub mod sequence;
pub use sequence::{random_dna_pair, Sequence, FASTA_LINE_WIDTH};
