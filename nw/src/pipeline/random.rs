use libnw::align::SequenceAligner;
use libnw::structs::{random_dna_pair, Sequence};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::args::RandomArgs;

use super::OutputStep;

pub fn random(args: &RandomArgs) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let (mut x, mut y) = random_dna_pair(args.length, &mut rng);
    label(&mut x, "x");
    label(&mut y, "y");

    log::info!("generated random sequences of length {} and {}", x.length, y.length);
    println!("{x}");
    println!("{y}");
    println!();

    let aligner = SequenceAligner::from_sequences(x, y, args.scoring_args.judge());
    OutputStep::new(&args.output_args, &args.common_args).write(&aligner)
}

/// Name a generated sequence so the pair prints as a readable fasta.
fn label(seq: &mut Sequence, name: &str) {
    seq.name = name.to_string();
    seq.details = Some(format!("length={}", seq.length));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{CommonArgs, OutputArgs, ScoringArgs};

    #[test]
    fn test_label_prints_fasta_header() {
        let mut rng = Pcg64::seed_from_u64(1);
        let (mut x, _) = random_dna_pair(100, &mut rng);
        label(&mut x, "x");

        let text = x.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ">x length=100");
        assert_eq!(lines[1], &x.to_text()[..80]);
        assert_eq!(lines[2], &x.to_text()[80..]);
    }

    #[test]
    fn test_random_is_reproducible_with_seed() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let outputs = (0..2)
            .map(|run| {
                let json_path = dir.path().join(format!("run-{run}.json"));
                let args = RandomArgs {
                    length: 10,
                    seed: Some(11),
                    scoring_args: ScoringArgs {
                        match_score: 2,
                        mismatch_score: -2,
                        gap_cost: -1,
                    },
                    output_args: OutputArgs {
                        json_path: Some(json_path.clone()),
                        ..Default::default()
                    },
                    common_args: CommonArgs {
                        allow_overwrite: false,
                    },
                };
                random(&args)?;
                Ok(std::fs::read_to_string(json_path)?)
            })
            .collect::<anyhow::Result<Vec<String>>>()?;

        assert_eq!(outputs[0], outputs[1]);

        let value: serde_json::Value = serde_json::from_str(&outputs[0])?;
        assert_eq!(value["table"]["rows"], 11);
        Ok(())
    }
}
