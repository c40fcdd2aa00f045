use std::fmt;

use log::{debug, trace};

use crate::alignment_mode::AlignmentMode;
use crate::matrix::ScoreMatrix;
use crate::scoring::{AlignmentStats, Position, Score, ScoringScheme};
use crate::{AlignerError, GAP_CHAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// seq1 character against a gap (vertical move).
    Deletion,
    /// Gap against a seq2 character (horizontal move).
    Insertion,
}

impl TracebackOperation {
    fn connector(self) -> char {
        match self {
            TracebackOperation::Match => '|',
            TracebackOperation::Mismatch => '.',
            TracebackOperation::Deletion | TracebackOperation::Insertion => ' ',
        }
    }
}

/// One reconstructed alignment.
///
/// `moves` lists the matrix cells visited by the traceback in visitation
/// order, starting at the cell the walk began from. `operations` is in
/// left-to-right alignment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub aligned_seq1: String,
    pub connector: String,
    pub aligned_seq2: String,
    pub operations: Vec<TracebackOperation>,
    pub moves: Vec<Position>,
    pub start_position: Position,
    pub end_position: Position,
}

impl AlignmentResult {
    /// Sequence-1 line, connector line and sequence-2 line, newline separated.
    pub fn to_text(&self) -> String {
        format!("{}\n{}\n{}", self.aligned_seq1, self.connector, self.aligned_seq2)
    }

    pub fn stats(&self) -> AlignmentStats {
        self.operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Deletion | TracebackOperation::Insertion => acc.gaps += 1,
                }
                acc
            })
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// Columns collected right to left during the walk.
#[derive(Default)]
struct Columns {
    top: Vec<char>,
    middle: Vec<char>,
    bottom: Vec<char>,
    operations: Vec<TracebackOperation>,
}

impl Columns {
    fn finish(mut self) -> (String, String, String, Vec<TracebackOperation>) {
        self.top.reverse();
        self.middle.reverse();
        self.bottom.reverse();
        self.operations.reverse();
        (
            self.top.into_iter().collect(),
            self.middle.into_iter().collect(),
            self.bottom.into_iter().collect(),
            self.operations,
        )
    }
}

/// Walks a filled matrix back to reconstruct one optimal alignment.
pub struct Traceback<'a> {
    matrix: &'a ScoreMatrix,
    scoring: &'a ScoringScheme,
}

impl<'a> Traceback<'a> {
    pub fn new(matrix: &'a ScoreMatrix, scoring: &'a ScoringScheme) -> Self {
        Self { matrix, scoring }
    }

    pub fn reconstruct_alignment(&self) -> Result<AlignmentResult, AlignerError> {
        match self.matrix.mode() {
            AlignmentMode::Global => self.global(),
            AlignmentMode::Local => self.local(),
        }
    }

    /// Picks the transition explaining the score at `pos`. Rules are tried
    /// in a fixed order: diagonal match, diagonal mismatch, vertical gap,
    /// horizontal gap.
    fn step(&self, pos: Position) -> Result<TracebackOperation, AlignerError> {
        let score = self.matrix.get(pos.i, pos.j);
        let invalid = || AlignerError::InvalidMatrixState {
            row: pos.i,
            col: pos.j,
            score,
        };
        if pos.i == 0 || pos.j == 0 {
            return Err(invalid());
        }

        let nb = self.matrix.neighbors(pos.i, pos.j);
        let gap = Score::from(self.scoring.gap);
        if self.matrix.is_match(pos.i, pos.j) && nb.diag + Score::from(self.scoring.match_score) == score {
            Ok(TracebackOperation::Match)
        } else if nb.diag + Score::from(self.scoring.mismatch) == score {
            Ok(TracebackOperation::Mismatch)
        } else if nb.up + gap == score {
            Ok(TracebackOperation::Deletion)
        } else if nb.left + gap == score {
            Ok(TracebackOperation::Insertion)
        } else {
            Err(invalid())
        }
    }

    /// Records the column produced by `op` at `pos` and returns the next cell.
    fn emit(&self, columns: &mut Columns, pos: Position, op: TracebackOperation) -> Position {
        let seq1 = self.matrix.seq1().as_slice();
        let seq2 = self.matrix.seq2().as_slice();
        let (top, bottom, next) = match op {
            TracebackOperation::Match | TracebackOperation::Mismatch => (
                seq1[pos.i - 1],
                seq2[pos.j - 1],
                Position::new(pos.i - 1, pos.j - 1),
            ),
            TracebackOperation::Deletion => (seq1[pos.i - 1], GAP_CHAR, Position::new(pos.i - 1, pos.j)),
            TracebackOperation::Insertion => (GAP_CHAR, seq2[pos.j - 1], Position::new(pos.i, pos.j - 1)),
        };
        trace!("({}, {}) -> ({}, {}) via {:?}", pos.i, pos.j, next.i, next.j, op);

        columns.top.push(top);
        columns.middle.push(op.connector());
        columns.bottom.push(bottom);
        columns.operations.push(op);
        next
    }

    /// Walks from the bottom-right cell to the origin.
    pub fn global(&self) -> Result<AlignmentResult, AlignerError> {
        let start = Position::new(self.matrix.rows() - 1, self.matrix.cols() - 1);
        let mut pos = start;
        let mut columns = Columns::default();
        let mut moves = Vec::new();

        while pos.i > 0 && pos.j > 0 {
            moves.push(pos);
            let op = self.step(pos)?;
            pos = self.emit(&mut columns, pos, op);
        }

        // On the border only one sequence has characters left; they face
        // leading gaps without consulting the matrix.
        while pos.i > 0 {
            moves.push(pos);
            pos = self.emit(&mut columns, pos, TracebackOperation::Deletion);
        }
        while pos.j > 0 {
            moves.push(pos);
            pos = self.emit(&mut columns, pos, TracebackOperation::Insertion);
        }

        let (aligned_seq1, connector, aligned_seq2, operations) = columns.finish();
        debug!("Global traceback visited {} cells", moves.len());

        Ok(AlignmentResult {
            aligned_seq1,
            connector,
            aligned_seq2,
            operations,
            moves,
            start_position: start,
            end_position: pos,
        })
    }

    /// Walks from the maximum cell until a cell scoring zero. Unaligned
    /// flanks are kept in lowercase on both sides of the aligned region.
    pub fn local(&self) -> Result<AlignmentResult, AlignerError> {
        let (best, start) = self.matrix.max_cell();
        let seq1 = self.matrix.seq1().as_slice();
        let seq2 = self.matrix.seq2().as_slice();
        debug!("Local traceback starts at ({}, {}) with score {}", start.i, start.j, best);

        let suffix1 = lowercase(&seq1[start.i..]);
        let suffix2 = lowercase(&seq2[start.j..]);

        let mut pos = start;
        let mut columns = Columns::default();
        let mut moves = Vec::new();

        // The zero cell that stops the walk is not part of the alignment.
        while self.matrix.get(pos.i, pos.j) != 0 {
            moves.push(pos);
            let op = self.step(pos)?;
            pos = self.emit(&mut columns, pos, op);
        }

        let (core1, core_connector, core2, operations) = columns.finish();
        let prefix1 = lowercase(&seq1[..pos.i]);
        let prefix2 = lowercase(&seq2[..pos.j]);

        // Shorter flank gets leading gaps, the connector is shifted past both.
        let pad1 = pos.j.saturating_sub(pos.i);
        let pad2 = pos.i.saturating_sub(pos.j);
        let flank = pos.i.max(pos.j);

        let aligned_seq1 = gaps(pad1) + &prefix1 + &core1 + &suffix1;
        let aligned_seq2 = gaps(pad2) + &prefix2 + &core2 + &suffix2;
        let connector = " ".repeat(flank) + &core_connector;
        debug!("Local traceback visited {} cells", moves.len());

        Ok(AlignmentResult {
            aligned_seq1,
            connector,
            aligned_seq2,
            operations,
            moves,
            start_position: start,
            end_position: pos,
        })
    }
}

// One output character per input character, so flank columns stay aligned.
fn lowercase(chars: &[char]) -> String {
    chars
        .iter()
        .map(|&c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fn gaps(count: usize) -> String {
    std::iter::repeat(GAP_CHAR).take(count).collect()
}
