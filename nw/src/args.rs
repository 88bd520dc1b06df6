use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use libnw::align::Judge;

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(about = "Globally align two sequences")]
    Align(AlignArgs),
    #[command(about = "Generate a random pair of DNA sequences and align them")]
    Random(RandomArgs),
}

#[derive(Parser, Debug)]
#[command(name = "nw")]
#[command(about = "Compute an optimal global alignment of two sequences with a linear gap penalty")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Allow nw to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Debug, Args)]
pub struct AlignArgs {
    /// The first sequence (or a fasta file with --fasta)
    #[arg(value_name = "X")]
    pub x: String,

    /// The second sequence (or a fasta file with --fasta)
    #[arg(value_name = "Y")]
    pub y: String,

    /// Read X and Y as paths to fasta files and align the first record of each
    #[arg(short = 'f', long = "fasta", action)]
    pub fasta: bool,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that are common across all nw subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// The length of the first sequence
    #[arg(value_name = "N")]
    pub length: usize,

    /// Seed the random number generator for a reproducible pair
    #[arg(short = 's', long = "seed", value_name = "n")]
    pub seed: Option<u64>,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that are common across all nw subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// The score for two identical residues
    #[arg(
        short = 'M',
        long = "match",
        default_value_t = Judge::DEFAULT_MATCH_SCORE,
        allow_hyphen_values = true,
        value_name = "n"
    )]
    pub match_score: i32,

    /// The score for two different residues
    #[arg(
        short = 'X',
        long = "mismatch",
        default_value_t = Judge::DEFAULT_MISMATCH_SCORE,
        allow_hyphen_values = true,
        value_name = "n"
    )]
    pub mismatch_score: i32,

    /// The score for a residue placed opposite a gap
    #[arg(
        short = 'G',
        long = "gap",
        default_value_t = Judge::DEFAULT_GAP_COST,
        allow_hyphen_values = true,
        value_name = "n"
    )]
    pub gap_cost: i32,
}

impl ScoringArgs {
    pub fn judge(&self) -> Judge {
        Judge::new(self.match_score, self.mismatch_score, self.gap_cost)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print the filled alignment table with the optimal path highlighted
    #[arg(short = 't', long = "table", action)]
    pub print_table: bool,

    /// Where to place a plain text dump of the alignment table
    #[arg(short = 'D', long = "dump", value_name = "path")]
    pub dump_path: Option<PathBuf>,

    /// Where to place JSON output (alignment, scoring, and table cells)
    #[arg(short = 'J', long = "json", value_name = "path")]
    pub json_path: Option<PathBuf>,
}
