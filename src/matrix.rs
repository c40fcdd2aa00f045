use std::fmt;

use log::debug;

use crate::alignment_mode::AlignmentMode;
use crate::scoring::{Neighbors, Position, Score, ScoringScheme, Weight};
use crate::{Sequence, GAP_CHAR};

/// The (m+1) x (n+1) dynamic programming grid together with the two
/// sequences indexing it. Row `i > 0` stands for `seq1[i-1]`, column `j > 0`
/// for `seq2[j-1]`; row and column 0 are the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<Score>,
    rows: usize,
    cols: usize,
    mode: AlignmentMode,
    seq1: Sequence,
    seq2: Sequence,
}

impl ScoreMatrix {
    /// Allocates the matrix and initializes its border for `mode`.
    /// `gap` is only used by global alignment.
    pub fn new(seq1: Sequence, seq2: Sequence, mode: AlignmentMode, gap: Weight) -> Self {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        let mut matrix = Self {
            data: vec![0; rows * cols],
            rows,
            cols,
            mode,
            seq1,
            seq2,
        };

        if mode == AlignmentMode::Global {
            let gap = Score::from(gap);
            for i in 0..rows {
                matrix.set(i, 0, i as Score * gap);
            }
            for j in 0..cols {
                matrix.set(0, j, j as Score * gap);
            }
        }

        matrix
    }

    pub fn global(seq1: Sequence, seq2: Sequence, gap: Weight) -> Self {
        Self::new(seq1, seq2, AlignmentMode::Global, gap)
    }

    pub fn local(seq1: Sequence, seq2: Sequence) -> Self {
        Self::new(seq1, seq2, AlignmentMode::Local, 0)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn seq1(&self) -> &Sequence {
        &self.seq1
    }

    pub fn seq2(&self) -> &Sequence {
        &self.seq2
    }

    pub fn get(&self, row: usize, col: usize) -> Score {
        self.data[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Score) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[Score] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Up, diagonal and left neighbors of an interior cell.
    pub fn neighbors(&self, row: usize, col: usize) -> Neighbors {
        Neighbors {
            up: self.get(row - 1, col),
            diag: self.get(row - 1, col - 1),
            left: self.get(row, col - 1),
        }
    }

    /// Whether the characters labelling an interior cell are equal.
    pub fn is_match(&self, row: usize, col: usize) -> bool {
        self.seq1.as_slice()[row - 1] == self.seq2.as_slice()[col - 1]
    }

    /// Fills the interior in row-major order and returns the optimal score:
    /// the bottom-right cell for global alignment, the matrix maximum for
    /// local alignment.
    pub fn fill(&mut self, scoring: &ScoringScheme) -> Score {
        for i in 1..self.rows {
            for j in 1..self.cols {
                let value = scoring.cell_score(self.mode, self.neighbors(i, j), self.is_match(i, j));
                self.set(i, j, value);
            }
        }

        let score = match self.mode {
            AlignmentMode::Global => self.get(self.rows - 1, self.cols - 1),
            AlignmentMode::Local => self.max_cell().0,
        };
        debug!(
            "Filled {}x{} {} matrix, score {}",
            self.rows, self.cols, self.mode, score
        );
        score
    }

    /// Maximum value and its position. Among equal maxima the cell with the
    /// smallest row-major index wins.
    pub fn max_cell(&self) -> (Score, Position) {
        let mut best_value = self.data[0];
        let mut best_index = 0;
        for (index, &value) in self.data.iter().enumerate().skip(1) {
            if value > best_value {
                best_value = value;
                best_index = index;
            }
        }
        (
            best_value,
            Position::new(best_index / self.cols, best_index % self.cols),
        )
    }

    /// `-` followed by the characters of seq1.
    pub fn row_labels(&self) -> Vec<String> {
        Self::labels(&self.seq1)
    }

    /// `-` followed by the characters of seq2.
    pub fn col_labels(&self) -> Vec<String> {
        Self::labels(&self.seq2)
    }

    fn labels(seq: &Sequence) -> Vec<String> {
        std::iter::once(GAP_CHAR)
            .chain(seq.as_slice().iter().copied())
            .map(String::from)
            .collect()
    }
}

impl fmt::Display for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_labels = self.row_labels();
        let col_labels = self.col_labels();
        let width = self
            .data
            .iter()
            .map(|value| value.to_string().len())
            .chain(row_labels.iter().chain(&col_labels).map(|l| l.chars().count()))
            .max()
            .unwrap_or(1);

        write!(f, "{:>width$}", "")?;
        for label in &col_labels {
            write!(f, " {:>width$}", label)?;
        }
        for (row, label) in row_labels.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:>width$}", label)?;
            for value in self.row(row) {
                write!(f, " {:>width$}", value)?;
            }
        }
        Ok(())
    }
}
