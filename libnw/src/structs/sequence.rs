use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::{DNA_ALPHABET, GAP, PAD_BYTE, UTF8_SPACE};
use anyhow::{Context, Result};
use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown UTF8 sequence byte: {byte}")]
pub struct UnknownUtf8SequenceByteError {
    byte: u8,
}

#[derive(Error, Debug)]
#[error("gap symbol found at sequence position {position}")]
pub struct GapInSequenceError {
    position: usize,
}

/// The number of residues per line when a sequence is written as fasta.
pub const FASTA_LINE_WIDTH: usize = 80;

/// This holds the canonical (upper case) residues of a sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The upper case UTF8 bytes of the sequence, buffered
    /// with a pad byte so that residue i is at index i
    pub utf8_bytes: Vec<u8>,
}

/// Checks a single input byte and maps it to its canonical form.
fn canonical_byte(byte: u8, position: usize) -> Result<u8> {
    if !byte.is_ascii() {
        return Err(UnknownUtf8SequenceByteError { byte }.into());
    }

    if byte == GAP {
        return Err(GapInSequenceError { position }.into());
    }

    Ok(byte.to_ascii_uppercase())
}

impl Sequence {
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let mut utf8_bytes: Vec<u8> = vec![PAD_BYTE];

            for line in record.seq_lines() {
                for &byte in line {
                    let position = utf8_bytes.len();
                    utf8_bytes.push(
                        canonical_byte(byte, position)
                            .with_context(|| format!("bad residue in fasta record: {name}"))?,
                    );
                }
            }

            seqs.push(Sequence {
                name,
                details,
                length: utf8_bytes.len() - 1,
                utf8_bytes,
            });
        }
        Ok(seqs)
    }

    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        let mut utf8_bytes: Vec<u8> = vec![PAD_BYTE; bytes.len() + 1];

        for (idx, &byte) in bytes.iter().enumerate() {
            utf8_bytes[idx + 1] = canonical_byte(byte, idx + 1)?;
        }

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            length: bytes.len(),
            utf8_bytes,
        })
    }

    /// Generate a DNA sequence of the given length with
    /// nucleotides drawn uniformly from the supplied RNG.
    pub fn random_dna(length: usize, rng: &mut impl Rng) -> Self {
        let mut utf8_bytes: Vec<u8> = Vec::with_capacity(length + 1);
        utf8_bytes.push(PAD_BYTE);
        utf8_bytes.extend((0..length).map(|_| DNA_ALPHABET[rng.gen_range(0..DNA_ALPHABET.len())]));

        Sequence {
            name: "random".to_string(),
            details: None,
            length,
            utf8_bytes,
        }
    }

    /// The residues without the leading pad byte.
    pub fn residues(&self) -> &[u8] {
        &self.utf8_bytes[1..]
    }

    pub fn to_text(&self) -> String {
        self.residues().iter().map(|&b| char::from(b)).collect()
    }
}

/// Generate a pair of random DNA sequences where the first is exactly `length`
/// long and the second is `length` plus or minus an offset below `length / 2`.
pub fn random_dna_pair(length: usize, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let max_offset = length / 2;
    let offset = match max_offset {
        0 => 0,
        _ => rng.gen_range(0..max_offset),
    };

    let other_length = if rng.gen_bool(0.5) {
        length + offset
    } else {
        length - offset
    };

    (
        Sequence::random_dna(length, rng),
        Sequence::random_dna(other_length, rng),
    )
}

/// Formats the sequence as a fasta record, wrapping residues at `FASTA_LINE_WIDTH`.
impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, ">{} {details}", self.name)?,
            None => write!(f, ">{}", self.name)?,
        }

        for line in self.residues().chunks(FASTA_LINE_WIDTH) {
            let line = std::str::from_utf8(line).map_err(|_| std::fmt::Error)?;
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
