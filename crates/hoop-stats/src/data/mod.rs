// Input data: roster and game-result parsing plus unit normalization.

pub mod games;
pub mod players;
pub mod units;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use games::{Game, PlayerPoints};
pub use players::{Gender, Player};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A single input row that could not be turned into a record. Loaders skip
/// these with a warning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("malformed row: {reason}")]
    MalformedRow { reason: String },

    #[error("non-numeric {field}: {value:?}")]
    NonNumericInput { field: &'static str, value: String },

    #[error("bad {field}: {source}")]
    Measurement {
        field: &'static str,
        source: units::UnitError,
    },
}

/// Failure to load an input file as a whole. These abort the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    MissingFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub(crate) async fn read_input(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::MissingFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Data rows of a CRLF-delimited file: the header row and blank rows are
/// dropped. Yields `(line_number, row)` with 1-based line numbers.
pub(crate) fn data_rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .skip(1)
        .map(|(idx, row)| (idx + 1, row))
        .filter(|(_, row)| !row.trim().is_empty())
}
