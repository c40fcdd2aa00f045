use std::path::PathBuf;

use clap::Parser;

use crate::alignment_mode::{AlignmentMode, AlignmentParams};
use crate::config::{OutputConfig, RunConfig, DEFAULT_ALIGNMENT_PATH, DEFAULT_HTML_PATH};
use crate::scoring::{ScoringScheme, Weight};
use crate::{AlignerError, Sequence};

pub const USAGE: &str = "The correct structure for the command is:\n\
    dp-aligner <seq1> <seq2> <method> [<match> <mismatch> <gap>]\n\
    Scores default to match=1, mismatch=-1, gap=-2 when omitted.\n\
    Put `--` before the positionals if a sequence starts with `--`.";

#[derive(Debug, Parser)]
#[command(name = "dp-aligner")]
#[command(version)]
#[command(about = "Global (Needleman-Wunsch) and local (Smith-Waterman) pairwise alignment", long_about = None)]
pub struct Cli {
    /// First sequence
    #[arg(allow_hyphen_values = true)]
    pub seq1: Option<String>,

    /// Second sequence
    #[arg(allow_hyphen_values = true)]
    pub seq2: Option<String>,

    /// Alignment method: global or local (not case sensitive)
    pub method: Option<String>,

    /// Match, mismatch and gap scores (all three or none)
    #[arg(allow_negative_numbers = true)]
    pub scores: Vec<Weight>,

    /// Output file for the text alignment
    #[arg(long, default_value = DEFAULT_ALIGNMENT_PATH)]
    pub alignment_out: PathBuf,

    /// Output file for the HTML score matrix
    #[arg(long, default_value = DEFAULT_HTML_PATH)]
    pub html_out: PathBuf,
}

impl Cli {
    /// Number of positional values received.
    pub fn positional_count(&self) -> usize {
        [&self.seq1, &self.seq2, &self.method]
            .iter()
            .filter(|arg| arg.is_some())
            .count()
            + self.scores.len()
    }

    /// Validates the argument count, then the method name.
    pub fn into_run_config(self) -> Result<RunConfig, AlignerError> {
        let count = self.positional_count();
        let (Some(seq1), Some(seq2), Some(method)) = (self.seq1, self.seq2, self.method) else {
            return Err(AlignerError::ArgumentCount(count));
        };

        let scoring = match self.scores.as_slice() {
            [] => ScoringScheme::default(),
            &[match_score, mismatch, gap] => ScoringScheme::new(match_score, mismatch, gap),
            _ => return Err(AlignerError::ArgumentCount(count)),
        };
        let mode: AlignmentMode = method.parse()?;

        Ok(RunConfig {
            seq1: Sequence::new(&seq1),
            seq2: Sequence::new(&seq2),
            params: AlignmentParams { mode, scoring },
            output: OutputConfig {
                alignment_path: self.alignment_out,
                html_path: self.html_out,
            },
        })
    }
}
