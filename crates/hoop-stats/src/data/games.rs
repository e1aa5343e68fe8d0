// Game-result rows: `<team>,[<id>,<id>,...],[<pt>,<pt>,...]`.
//
// The two bracketed lists cannot be split on commas with the rest of the
// row, so rows are matched against an anchored pattern with one capture per
// field and each list is split separately.
//
// Scores are whole, non-negative numbers that fit a `u32`; a row with a
// fractional or negative score is rejected like any other non-numeric token.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use super::{data_rows, read_input, LoadError, RowError};

static GAME_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<team>[^,]*),\[(?P<players>[^\[\]]*)\],\[(?P<points>[^\[\]]*)\]$")
        .expect("valid game row regex")
});

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Points credited to one player in one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPoints {
    pub player_id: String,
    pub points: u32,
}

/// One game won by `winning_team`, with the points each of its players scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub winning_team: String,
    pub box_score: Vec<PlayerPoints>,
}

impl Game {
    pub fn player_ids(&self) -> impl Iterator<Item = &str> {
        self.box_score.iter().map(|pp| pp.player_id.as_str())
    }

    pub fn points(&self) -> impl Iterator<Item = u32> + '_ {
        self.box_score.iter().map(|pp| pp.points)
    }

    /// Sum of every player's points. Each token fits a `u32`; the sum may not.
    pub fn total_points(&self) -> u64 {
        self.points().map(u64::from).sum()
    }

    pub fn won_by(&self, team: &str) -> bool {
        self.winning_team == team
    }
}

/// Renders the row form the game was parsed from.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.player_ids().collect();
        let points: Vec<String> = self.points().map(|p| p.to_string()).collect();
        write!(
            f,
            "{},[{}],[{}]",
            self.winning_team,
            ids.join(","),
            points.join(",")
        )
    }
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    let list = list.trim();
    // `[]` is an empty list, not a list holding one empty token.
    let tokens = if list.is_empty() { None } else { Some(list.split(',')) };
    tokens.into_iter().flatten().map(str::trim)
}

/// Split a game row into its winning team, player ids and points.
///
/// The returned lists are positionally parallel but not checked for equal
/// length; see [`parse_game_line`].
pub fn split_game_line(line: &str) -> Result<(String, Vec<String>, Vec<u32>), RowError> {
    let caps = GAME_ROW
        .captures(line.trim_end_matches(['\r', '\n']))
        .ok_or_else(|| RowError::MalformedRow {
            reason: format!("expected `<team>,[ids],[points]`, got {line:?}"),
        })?;

    let team = caps["team"].trim().to_string();
    let players: Vec<String> = split_list(&caps["players"]).map(String::from).collect();
    let points = split_list(&caps["points"])
        .map(|tok| {
            tok.parse::<u32>().map_err(|_| RowError::NonNumericInput {
                field: "points",
                value: tok.to_string(),
            })
        })
        .collect::<Result<Vec<u32>, RowError>>()?;

    Ok((team, players, points))
}

/// Parse a game row into a [`Game`], pairing each player id with its points.
pub fn parse_game_line(line: &str) -> Result<Game, RowError> {
    let (winning_team, players, points) = split_game_line(line)?;
    if players.len() != points.len() {
        return Err(RowError::MalformedRow {
            reason: format!(
                "{} player ids but {} point values",
                players.len(),
                points.len()
            ),
        });
    }

    let box_score = players
        .into_iter()
        .zip(points)
        .map(|(player_id, points)| PlayerPoints { player_id, points })
        .collect();

    Ok(Game {
        winning_team,
        box_score,
    })
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse the text of a games file, skipping the header and any malformed rows.
pub fn parse_games(text: &str) -> Vec<Game> {
    let mut games = Vec::new();
    for (line_no, row) in data_rows(text) {
        match parse_game_line(row) {
            Ok(game) => games.push(game),
            Err(e) => warn!("skipping game on line {}: {}", line_no, e),
        }
    }
    games
}

/// Load and parse a games file.
pub async fn load_games(path: &Path) -> Result<Vec<Game>, LoadError> {
    let text = read_input(path).await?;
    let games = parse_games(&text);
    info!("Loaded {} games from {}", games.len(), path.display());
    Ok(games)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
