use std::collections::HashSet;
use std::fmt;
use std::fs;

use log::info;

use crate::config::OutputConfig;
use crate::matrix::ScoreMatrix;
use crate::scoring::Position;
use crate::{AlignerError, AlignmentOutcome};

const HIGHLIGHT: &str = "background-color: lightgreen";

/// HTML table of the score matrix with the traceback cells highlighted.
pub fn matrix_to_html(matrix: &ScoreMatrix, moves: &[Position]) -> String {
    HtmlTable::new(matrix, moves).to_string()
}

/// Renders the score matrix as an HTML table through `Display`.
pub struct HtmlTable<'a> {
    matrix: &'a ScoreMatrix,
    highlighted: HashSet<Position>,
}

impl<'a> HtmlTable<'a> {
    pub fn new(matrix: &'a ScoreMatrix, moves: &[Position]) -> Self {
        Self {
            matrix,
            highlighted: moves.iter().copied().collect(),
        }
    }
}

impl fmt::Display for HtmlTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<table border=1 class=\"dataframe\">")?;
        writeln!(f, "  <thead>\n    <tr>\n      <th></th>")?;
        for label in self.matrix.col_labels() {
            writeln!(f, "      <th>{}</th>", escape(&label))?;
        }
        writeln!(f, "    </tr>\n  </thead>\n  <tbody>")?;

        for (i, label) in self.matrix.row_labels().iter().enumerate() {
            writeln!(f, "    <tr>\n      <th>{}</th>", escape(label))?;
            for (j, value) in self.matrix.row(i).iter().enumerate() {
                if self.highlighted.contains(&Position::new(i, j)) {
                    writeln!(f, "      <td style=\"{}\">{}</td>", HIGHLIGHT, value)?;
                } else {
                    writeln!(f, "      <td>{}</td>", value)?;
                }
            }
            writeln!(f, "    </tr>")?;
        }

        writeln!(f, "  </tbody>\n</table>")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Alignment, method, score and matrix dump for the console.
pub fn console_summary(outcome: &AlignmentOutcome) -> String {
    format!(
        "\nThe optimal alignment between the two sequences is:\n{}\n\n\
         Method used: {}\n\
         Alignment score: {}\n\n\
         Score matrix:\n{}",
        outcome.alignment, outcome.mode, outcome.score, outcome.matrix
    )
}

/// Writes the text alignment and the HTML score matrix.
pub fn write_outputs(outcome: &AlignmentOutcome, output: &OutputConfig) -> Result<(), AlignerError> {
    fs::write(&output.alignment_path, outcome.alignment.to_text())?;
    info!("Wrote alignment to {}", output.alignment_path.display());

    fs::write(
        &output.html_path,
        matrix_to_html(&outcome.matrix, &outcome.alignment.moves),
    )?;
    info!("Wrote score matrix to {}", output.html_path.display());
    Ok(())
}
