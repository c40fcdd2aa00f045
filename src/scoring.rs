use crate::alignment_mode::AlignmentMode;
use crate::{DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH};

/// Value of one matrix cell. Wider than [`Weight`] so sums of weights along
/// a path cannot overflow.
pub type Score = i64;

/// A match, mismatch or gap weight.
pub type Weight = i32;

/// Linear scoring scheme fixed for one alignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    pub match_score: Weight,
    pub mismatch: Weight,
    pub gap: Weight,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

/// The three already computed cells an interior cell depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub up: Score,
    pub diag: Score,
    pub left: Score,
}

impl ScoringScheme {
    pub fn new(match_score: Weight, mismatch: Weight, gap: Weight) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Score of one interior cell.
    ///
    /// Equal characters always extend the diagonal. Otherwise the best of
    /// the horizontal gap, diagonal mismatch and vertical gap is taken, floored
    /// at zero for local alignment.
    pub fn cell_score(&self, mode: AlignmentMode, neighbors: Neighbors, is_match: bool) -> Score {
        if is_match {
            return neighbors.diag + Score::from(self.match_score);
        }

        let gap = Score::from(self.gap);
        let best = (neighbors.left + gap)
            .max(neighbors.diag + Score::from(self.mismatch))
            .max(neighbors.up + gap);

        match mode {
            AlignmentMode::Global => best,
            AlignmentMode::Local => best.max(0),
        }
    }
}

/// Matrix coordinate: `i` is the row (seq1), `j` the column (seq2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl From<(usize, usize)> for Position {
    fn from((i, j): (usize, usize)) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
}

impl AlignmentStats {
    /// Number of aligned columns.
    pub fn length(&self) -> u32 {
        self.matches + self.mismatches + self.gaps
    }
}
