use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::alphabet::{GAP, LADDER_GAP, LADDER_MATCH, LADDER_MISMATCH};

/// A finished alignment in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentSummary {
    /// The first sequence with gaps inserted
    pub aligned_x: String,
    /// One ladder symbol per aligned column
    pub ladder: String,
    /// The second sequence with gaps inserted
    pub aligned_y: String,
    /// The score of the alignment under the judge that produced it
    pub score: i32,
}

/// This selects the proper character for the middle line of the alignment reporting.
fn select_ladder_character(x_byte: u8, y_byte: u8) -> u8 {
    if x_byte == GAP || y_byte == GAP {
        LADDER_GAP
    } else if x_byte == y_byte {
        LADDER_MATCH
    } else {
        LADDER_MISMATCH
    }
}

impl AlignmentSummary {
    pub fn new(aligned_x: &str, aligned_y: &str, score: i32) -> Self {
        debug_assert_eq!(aligned_x.len(), aligned_y.len());

        let ladder = aligned_x
            .bytes()
            .zip(aligned_y.bytes())
            .map(|(x_byte, y_byte)| char::from(select_ladder_character(x_byte, y_byte)))
            .collect();

        Self {
            aligned_x: aligned_x.to_string(),
            ladder,
            aligned_y: aligned_y.to_string(),
            score,
        }
    }

    /// The number of aligned columns.
    pub fn length(&self) -> usize {
        self.ladder.len()
    }

    /// The fraction of columns that are exact matches.
    pub fn identity(&self) -> f64 {
        match self.length() {
            0 => 0.0,
            length => {
                let matches = self.ladder.bytes().filter(|&b| b == LADDER_MATCH).count();
                matches as f64 / length as f64
            }
        }
    }
}

impl Display for AlignmentSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.aligned_x)?;
        writeln!(f, "{}", self.ladder)?;
        writeln!(f, "{}", self.aligned_y)?;
        write!(f, "score = {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder() {
        let summary = AlignmentSummary::new("ACAC_C_C", "GC_CTCGA", -1);
        assert_eq!(summary.ladder, ":|.|.|.:");
        assert_eq!(summary.length(), 8);
        assert_eq!(summary.identity(), 3.0 / 8.0);
    }

    #[test]
    fn test_display() {
        let summary = AlignmentSummary::new("AC", "_C", 1);
        assert_eq!(summary.to_string(), "AC\n.|\n_C\nscore = 1");
    }

    #[test]
    fn test_empty() {
        let summary = AlignmentSummary::new("", "", 0);
        assert_eq!(summary.length(), 0);
        assert_eq!(summary.identity(), 0.0);
        assert_eq!(summary.to_string(), "\n\n\nscore = 0");
    }
}
