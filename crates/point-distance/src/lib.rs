// Euclidean distance between two points, recorded to dataPoints/points.txt.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

pub const DATA_DIR: &str = "dataPoints";
pub const DATA_FILE: &str = "points.txt";

#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Math
// ---------------------------------------------------------------------------

fn square(n: f64) -> f64 {
    n * n
}

fn square_root(n: f64) -> f64 {
    n.sqrt()
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    square_root(square(x2 - x1) + square(y2 - y1))
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Parse one coordinate argument. Blank input is zero and only the exact
/// spelling `Infinity` (optionally signed) names an infinity; anything else
/// that is not a decimal number becomes NaN and flows through to the result.
pub fn parse_coordinate(raw: &str) -> f64 {
    let trimmed = raw.trim();
    match trimmed {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `str::parse` also takes `inf`, `infinity` and `nan` in any case.
    let decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    match trimmed.parse::<f64>() {
        Ok(value) if decimal => value,
        _ => {
            warn!("coordinate {:?} is not a number", raw);
            f64::NAN
        }
    }
}

/// The four coordinates exactly as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsInput {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
}

impl PointsInput {
    /// The raw input line stored ahead of the result.
    pub fn raw_line(&self) -> String {
        format!("{}, {}, {}, {}", self.x1, self.y1, self.x2, self.y2)
    }

    pub fn distance(&self) -> f64 {
        distance(
            parse_coordinate(&self.x1),
            parse_coordinate(&self.y1),
            parse_coordinate(&self.x2),
            parse_coordinate(&self.y2),
        )
    }

    /// The human-readable result line, including its leading line break.
    pub fn distance_line(&self, d: f64) -> String {
        format!(
            "\nThe distance between your two points: ({},{}), ({},{}) is {}",
            self.x1, self.y1, self.x2, self.y2, d
        )
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> DistanceError {
    let path = path.to_path_buf();
    move |source| DistanceError::Io { path, source }
}

/// Create `dir` if needed, overwrite `dir/points.txt` with the raw input,
/// then append the computed distance. Returns the file path.
pub async fn record_distance(dir: &Path, input: &PointsInput) -> Result<PathBuf, DistanceError> {
    tokio::fs::create_dir_all(dir).await.map_err(io_error(dir))?;

    let path = dir.join(DATA_FILE);
    tokio::fs::write(&path, input.raw_line())
        .await
        .map_err(io_error(&path))?;
    info!("Content written to file");

    let d = input.distance();
    let mut file = tokio::fs::OpenOptions::new()
        .append(true)
        .open(&path)
        .await
        .map_err(io_error(&path))?;
    file.write_all(input.distance_line(d).as_bytes())
        .await
        .map_err(io_error(&path))?;
    file.flush().await.map_err(io_error(&path))?;

    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn input(x1: &str, y1: &str, x2: &str, y2: &str) -> PointsInput {
        PointsInput {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        }
    }

    // -- Math --

    #[test]
    fn three_four_five() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_same_point() {
        assert_eq!(distance(1.5, -2.0, 1.5, -2.0), 0.0);
        assert_eq!(distance(-1.0, 2.0, 3.0, 5.0), distance(3.0, 5.0, -1.0, 2.0));
    }

    // -- Parsing --

    #[test]
    fn coordinates_parse_like_numbers() {
        assert_eq!(parse_coordinate("3"), 3.0);
        assert_eq!(parse_coordinate(" -2.5 "), -2.5);
        assert_eq!(parse_coordinate(""), 0.0);
        assert!(parse_coordinate("abc").is_nan());
        assert_eq!(parse_coordinate("1e2"), 100.0);
    }

    #[test]
    fn infinity_needs_exact_spelling() {
        assert_eq!(parse_coordinate("Infinity"), f64::INFINITY);
        assert_eq!(parse_coordinate("+Infinity"), f64::INFINITY);
        assert_eq!(parse_coordinate(" -Infinity "), f64::NEG_INFINITY);
        for raw in ["inf", "-inf", "INF", "infinity", "INFINITY", "nan", "NaN"] {
            assert!(parse_coordinate(raw).is_nan(), "{raw} should be NaN");
        }
    }

    // -- Formatting --

    #[test]
    fn lines_use_raw_arguments() {
        let inp = input("0", "0", "3", "4");
        assert_eq!(inp.raw_line(), "0, 0, 3, 4");
        assert_eq!(
            inp.distance_line(inp.distance()),
            "\nThe distance between your two points: (0,0), (3,4) is 5"
        );
    }

    #[test]
    fn non_numeric_input_yields_nan() {
        let inp = input("a", "0", "3", "4");
        assert!(inp.distance().is_nan());
        assert!(inp.distance_line(inp.distance()).ends_with(" is NaN"));
    }
}
