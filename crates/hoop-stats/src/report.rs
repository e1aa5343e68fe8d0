// Report rendering and the stats.txt writer.
//
// The first section truncates the report file; later sections append.
// Every write opens and closes the file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::data::Player;
use crate::queries::TopScorer;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

/// Render rows as a box-drawn table. Every row is separated by a rule and
/// each column is padded to its widest cell.
pub fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = |left: &str, fill: &str, join: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(join))
    };

    let mut out = rule("╔", "═", "╤", "╗");
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            out.push_str(&rule("╟", "─", "┼", "╢"));
        }
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = w - cell.chars().count();
                format!(" {cell}{} ", " ".repeat(pad))
            })
            .collect();
        out.push_str(&format!("║{}║\n", cells.join("│")));
    }
    out.push_str(&rule("╚", "═", "╧", "╝"));
    out
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

pub fn format_heaviest(players: &[&Player]) -> Vec<Vec<String>> {
    let header = vec!["Name".to_string(), "Country".to_string(), "Weight".to_string()];
    let rows = players.iter().map(|p| {
        vec![
            p.full_name(),
            p.country.clone(),
            p.weight_kg.to_string(),
        ]
    });
    std::iter::once(header).chain(rows).collect()
}

pub fn heaviest_section(players: &[&Player]) -> String {
    format!("Q1: \n{}", render_table(&format_heaviest(players)))
}

pub fn tallest_section(player: &Player, country: &str) -> String {
    format!(
        "\nQ2: TALLEST PLAYER:\nThe tallest female basketball player from {country} is {}, {}cm tall.\n",
        player.full_name(),
        player.height_cm
    )
}

pub fn high_scoring_section(count: usize, country: &str, threshold: u32) -> String {
    format!(
        "\nQ3: GAMES WHERE {} SCORED OVER {threshold} POINTS\n {count} \n",
        country.to_uppercase()
    )
}

pub fn top_scorer_section(top: &TopScorer<'_>, country: &str) -> String {
    format!(
        "\nQ4: HIGHEST SCORING MALE {} PLAYER:\n{} with {} points total.\n",
        country.to_uppercase(),
        top.player.full_name(),
        top.points
    )
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Writes report sections to a single file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the report's contents with `content`.
    pub async fn write(&self, content: &str) -> Result<(), ReportError> {
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| self.io_error(e))
    }

    /// Append `content`, creating the file if it does not exist.
    pub async fn append(&self, content: &str) -> Result<(), ReportError> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| self.io_error(e))?;
        file.flush().await.map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> ReportError {
        ReportError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
