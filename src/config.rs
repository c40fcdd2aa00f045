use std::path::PathBuf;

use crate::alignment_mode::AlignmentParams;
use crate::Sequence;

pub const DEFAULT_ALIGNMENT_PATH: &str = "alignment.txt";
pub const DEFAULT_HTML_PATH: &str = "score_matrix.html";

/// Where the text alignment and the HTML score matrix are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub alignment_path: PathBuf,
    pub html_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            alignment_path: PathBuf::from(DEFAULT_ALIGNMENT_PATH),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
        }
    }
}

/// A fully validated command line: inputs, parameters and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seq1: Sequence,
    pub seq2: Sequence,
    pub params: AlignmentParams,
    pub output: OutputConfig,
}
