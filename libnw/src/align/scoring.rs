use serde::{Deserialize, Serialize};

use crate::alphabet::GAP;

/// The linear scoring scheme used to fill and re-score an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    match_score: i32,
    mismatch_score: i32,
    gap_cost: i32,
}

impl Default for Judge {
    fn default() -> Self {
        Self {
            match_score: Self::DEFAULT_MATCH_SCORE,
            mismatch_score: Self::DEFAULT_MISMATCH_SCORE,
            gap_cost: Self::DEFAULT_GAP_COST,
        }
    }
}

impl Judge {
    pub const DEFAULT_MATCH_SCORE: i32 = 2;
    pub const DEFAULT_MISMATCH_SCORE: i32 = -2;
    pub const DEFAULT_GAP_COST: i32 = -1;

    pub fn new(match_score: i32, mismatch_score: i32, gap_cost: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_cost,
        }
    }

    pub fn match_score(&self) -> i32 {
        self.match_score
    }

    pub fn mismatch_score(&self) -> i32 {
        self.mismatch_score
    }

    /// The penalty for a single residue placed opposite a gap.
    pub fn gap_cost(&self) -> i32 {
        self.gap_cost
    }

    /// Score a single aligned column. A gap on either side costs
    /// `gap_cost`, regardless of what is on the other side.
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        if a == GAP || b == GAP {
            self.gap_cost
        } else if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Score a complete alignment column by column.
    ///
    /// # Panics
    ///
    /// Panics if the two aligned sequences differ in length.
    pub fn score_aligned(&self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> i32 {
        let a = a.as_ref();
        let b = b.as_ref();
        assert!(
            a.len() == b.len(),
            "aligned sequences must have equal length: {} != {}",
            a.len(),
            b.len()
        );

        a.iter().zip(b).map(|(&a, &b)| self.score(a, b)).sum()
    }
}
