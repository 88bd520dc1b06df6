use std::fmt::{Display, Formatter};

use anyhow::{Context, Result};
use rand::Rng;

use crate::align::structs::{AlignmentSummary, Cache, Cell};
use crate::align::{fill_cache, traceback, Judge};
use crate::structs::{random_dna_pair, Sequence};

/// Aligns two sequences end to end on construction and
/// holds the filled cache along with the optimal alignment.
pub struct SequenceAligner {
    x: Sequence,
    y: Sequence,
    judge: Judge,
    cache: Cache,
    aligned_x: Option<String>,
    aligned_y: Option<String>,
}

impl SequenceAligner {
    /// Align the given sequences using the default judge.
    pub fn new(x: &str, y: &str) -> Result<Self> {
        Self::with_judge(x, y, Judge::default())
    }

    /// Align the given sequences using the specified judge.
    pub fn with_judge(x: &str, y: &str, judge: Judge) -> Result<Self> {
        let x = Sequence::from_utf8(x.as_bytes()).context("failed to read sequence x")?;
        let y = Sequence::from_utf8(y.as_bytes()).context("failed to read sequence y")?;
        Ok(Self::from_sequences(x, y, judge))
    }

    pub fn from_sequences(x: Sequence, y: Sequence, judge: Judge) -> Self {
        let mut cache = Cache::new(x.length, y.length);
        fill_cache(&mut cache, &x, &y, &judge);
        let (aligned_x, aligned_y) = traceback(&mut cache, &x, &y);

        Self {
            x,
            y,
            judge,
            cache,
            aligned_x: Some(aligned_x),
            aligned_y: Some(aligned_y),
        }
    }

    /// Generate a pair of random DNA sequences, where x is of length n and
    /// y has some length between n/2 and 3n/2, and align them using the
    /// default judge.
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        let (x, y) = random_dna_pair(n, rng);
        Self::from_sequences(x, y, Judge::default())
    }

    pub fn x(&self) -> &Sequence {
        &self.x
    }

    pub fn y(&self) -> &Sequence {
        &self.y
    }

    pub fn judge(&self) -> &Judge {
        &self.judge
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// The solution to aligning the first i residues of x against the first j residues of y.
    pub fn result(&self, i: usize, j: usize) -> &Cell {
        self.cache.get(i, j)
    }

    pub fn aligned_x(&self) -> Option<&str> {
        self.aligned_x.as_deref()
    }

    pub fn aligned_y(&self) -> Option<&str> {
        self.aligned_y.as_deref()
    }

    pub fn is_aligned(&self) -> bool {
        match (&self.aligned_x, &self.aligned_y) {
            (Some(aligned_x), Some(aligned_y)) => aligned_x.len() == aligned_y.len(),
            _ => false,
        }
    }

    /// Re-score the aligned sequences with the judge, or 0 if there is no alignment.
    pub fn score(&self) -> i32 {
        match (&self.aligned_x, &self.aligned_y) {
            (Some(aligned_x), Some(aligned_y)) if self.is_aligned() => {
                self.judge.score_aligned(aligned_x, aligned_y)
            }
            _ => 0,
        }
    }

    pub fn summary(&self) -> Option<AlignmentSummary> {
        match (&self.aligned_x, &self.aligned_y) {
            (Some(aligned_x), Some(aligned_y)) if self.is_aligned() => {
                Some(AlignmentSummary::new(aligned_x, aligned_y, self.score()))
            }
            _ => None,
        }
    }
}

impl Display for SequenceAligner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.summary() {
            Some(summary) => write!(f, "{summary}"),
            None => write!(f, "[X={},Y={}]", self.x.to_text(), self.y.to_text()),
        }
    }
}
