// Read-only queries over the normalized roster and game results.

use std::collections::HashMap;

use thiserror::Error;

use crate::data::{Game, Player};

/// A query whose candidate set turned out empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no female player from {country} found")]
    NoMatchingPlayer { country: String },

    #[error("no male player scored points in {country}'s wins")]
    NoScoringPlayer { country: String },
}

/// The best scorer found by [`top_scorer_in_wins`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopScorer<'a> {
    pub player: &'a Player,
    pub points: u64,
}

/// The `limit` heaviest male players, heaviest first.
///
/// The sort is stable, so players of equal weight keep their roster order.
pub fn heaviest_males(players: &[Player], limit: usize) -> Vec<&Player> {
    let mut males: Vec<&Player> = players.iter().filter(|p| p.is_male()).collect();
    males.sort_by(|a, b| b.weight_kg.total_cmp(&a.weight_kg));
    males.truncate(limit);
    males
}

/// The tallest female player from `country`. Ties go to the earlier roster entry.
pub fn tallest_female_from<'a>(
    players: &'a [Player],
    country: &str,
) -> Result<&'a Player, QueryError> {
    players
        .iter()
        .filter(|p| p.is_female() && p.country == country)
        .reduce(|best, p| if p.height_cm > best.height_cm { p } else { best })
        .ok_or_else(|| QueryError::NoMatchingPlayer {
            country: country.to_string(),
        })
}

/// Number of games won by `country` whose point total is strictly above
/// `threshold`.
pub fn high_scoring_wins(games: &[Game], country: &str, threshold: u32) -> usize {
    games
        .iter()
        .filter(|g| g.won_by(country) && g.total_points() > u64::from(threshold))
        .count()
}

/// Cumulative points per player id across every game won by `country`.
pub fn points_by_player<'a>(games: &'a [Game], country: &str) -> HashMap<&'a str, u64> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for game in games.iter().filter(|g| g.won_by(country)) {
        for entry in &game.box_score {
            *totals.entry(entry.player_id.as_str()).or_insert(0) += u64::from(entry.points);
        }
    }
    totals
}

/// The male player with the most points across `country`'s wins.
///
/// Every male on the roster is a candidate; one with no recorded points
/// counts as zero. Only a strictly greater total replaces the current best,
/// so ties go to the earlier roster entry. Fails when no male scored.
pub fn top_scorer_in_wins<'a>(
    players: &'a [Player],
    games: &[Game],
    country: &str,
) -> Result<TopScorer<'a>, QueryError> {
    let totals = points_by_player(games, country);

    let mut best: Option<TopScorer<'a>> = None;
    for player in players.iter().filter(|p| p.is_male()) {
        let points = totals.get(player.id.as_str()).copied().unwrap_or(0);
        let current = best.map_or(0, |b| b.points);
        if points > current {
            best = Some(TopScorer { player, points });
        }
    }

    best.ok_or_else(|| QueryError::NoScoringPlayer {
        country: country.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
