use anyhow::Context;
use libnw::align::SequenceAligner;

use crate::args::AlignArgs;
use crate::util::first_fasta_record;

use super::OutputStep;

pub fn align(args: &AlignArgs) -> anyhow::Result<()> {
    let judge = args.scoring_args.judge();

    let aligner = if args.fasta {
        let x = first_fasta_record(&args.x)
            .with_context(|| format!("failed to read x from fasta: {}", args.x))?;
        let y = first_fasta_record(&args.y)
            .with_context(|| format!("failed to read y from fasta: {}", args.y))?;

        log::info!(
            "aligning {} ({} residues) against {} ({} residues)",
            x.name,
            x.length,
            y.name,
            y.length
        );

        SequenceAligner::from_sequences(x, y, judge)
    } else {
        SequenceAligner::with_judge(&args.x, &args.y, judge)?
    };

    OutputStep::new(&args.output_args, &args.common_args).write(&aligner)
}
