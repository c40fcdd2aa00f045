use std::fmt;
use std::time::Instant;

use log::debug;
use thiserror::Error;

pub mod alignment_mode;
pub mod cli;
pub mod config;
pub mod matrix;
pub mod render;
pub mod scoring;
pub mod traceback;

pub use crate::alignment_mode::{AlignmentMode, AlignmentParams};
pub use crate::config::{OutputConfig, RunConfig};
pub use crate::matrix::ScoreMatrix;
pub use crate::scoring::{AlignmentStats, Neighbors, Position, Score, ScoringScheme, Weight};
pub use crate::traceback::{AlignmentResult, Traceback, TracebackOperation};

// Default scoring parameters
pub const DEFAULT_MATCH: Weight = 1;
pub const DEFAULT_MISMATCH: Weight = -1;
pub const DEFAULT_GAP: Weight = -2;

/// Character placed against a residue that has no counterpart.
pub const GAP_CHAR: char = '-';

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("The number of arguments is incorrect (got {0}, must be either 3 or 6)")]
    ArgumentCount(usize),
    #[error("Invalid alignment method \"{0}\", it must be either \"global\" or \"local\" (not case sensitive)")]
    UnknownMethod(String),
    #[error("Invalid score matrix: no transition explains cell ({row}, {col}) with score {score}")]
    InvalidMatrixState { row: usize, col: usize, score: Score },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An immutable character sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    data: Vec<char>,
}

impl Sequence {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.data
    }
}

impl From<&str> for Sequence {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Everything one alignment run produces: the optimal score, the filled
/// matrix (for visualization) and the reconstructed alignment.
#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    pub mode: AlignmentMode,
    pub score: Score,
    pub matrix: ScoreMatrix,
    pub alignment: AlignmentResult,
}

/// Runs matrix initialization, fill and traceback for one sequence pair.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    params: AlignmentParams,
}

impl Aligner {
    pub fn new(params: AlignmentParams) -> Self {
        Self { params }
    }

    pub fn with_alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.params.mode = mode;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringScheme) -> Self {
        self.params.scoring = scoring;
        self
    }

    pub fn params(&self) -> &AlignmentParams {
        &self.params
    }

    pub fn align(&self, seq1: Sequence, seq2: Sequence) -> Result<AlignmentOutcome, AlignerError> {
        let start_time = Instant::now();
        let AlignmentParams { mode, scoring } = self.params;

        let mut matrix = ScoreMatrix::new(seq1, seq2, mode, scoring.gap);
        let score = matrix.fill(&scoring);
        let alignment = Traceback::new(&matrix, &scoring).reconstruct_alignment()?;

        debug!(
            "{} alignment of {}x{} finished in {:?} (score {}, {} moves)",
            mode,
            matrix.seq1().len(),
            matrix.seq2().len(),
            start_time.elapsed(),
            score,
            alignment.moves.len()
        );

        Ok(AlignmentOutcome {
            mode,
            score,
            matrix,
            alignment,
        })
    }
}
