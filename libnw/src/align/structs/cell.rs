use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The move that produced the optimal score of a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The origin cell (0, 0), which has no parent
    #[default]
    None,
    /// A residue of each sequence was aligned as a match or mismatch
    Diagonal,
    /// A gap was placed in the first sequence, consuming a residue of the second
    Left,
    /// A gap was placed in the second sequence, consuming a residue of the first
    Up,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::None => write!(f, "-"),
            Direction::Diagonal => write!(f, "D"),
            Direction::Left => write!(f, "L"),
            Direction::Up => write!(f, "U"),
        }
    }
}

/// The solution to aligning the first i residues of one
/// sequence against the first j residues of the other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    score: i32,
    parent: Direction,
    marked: bool,
}

impl Cell {
    pub fn new(score: i32, parent: Direction) -> Self {
        Self {
            score,
            parent,
            marked: false,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn parent(&self) -> Direction {
        self.parent
    }

    /// Whether this cell lies on the reconstructed optimal path.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub(crate) fn mark(&mut self) {
        debug_assert!(!self.marked, "cell marked twice");
        self.marked = true;
    }
}
