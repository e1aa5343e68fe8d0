// Stats run: load both inputs, answer the four questions, write the report.
//
// All answers are computed before the report file is touched, so a failing
// query leaves any previous report in place instead of a partial one.

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::data::games::load_games;
use crate::data::players::load_players;
use crate::data::{Game, Player};
use crate::queries::{self, TopScorer};
use crate::report::{self, ReportWriter};

/// Rendered report sections, in the order they are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub heaviest: String,
    pub tallest: String,
    pub high_scoring: String,
    pub top_scorer: String,
}

/// Answer every question over already-loaded data.
pub fn build_report(
    players: &[Player],
    games: &[Game],
    config: &Config,
) -> Result<Report, queries::QueryError> {
    let q = &config.queries;

    let heaviest = queries::heaviest_males(players, q.heaviest_limit);
    let tallest = queries::tallest_female_from(players, &q.tallest_country)?;
    let wins = queries::high_scoring_wins(games, &q.high_scoring_country, q.points_threshold);
    let top: TopScorer<'_> = queries::top_scorer_in_wins(players, games, &q.top_scorer_country)?;

    info!(
        "Answers: {} heaviest males, tallest {} female {}, {} high-scoring {} wins, top {} scorer {} ({} pts)",
        heaviest.len(),
        q.tallest_country,
        tallest.full_name(),
        wins,
        q.high_scoring_country,
        q.top_scorer_country,
        top.player.full_name(),
        top.points
    );

    Ok(Report {
        heaviest: report::heaviest_section(&heaviest),
        tallest: report::tallest_section(tallest, &q.tallest_country),
        high_scoring: report::high_scoring_section(
            wins,
            &q.high_scoring_country,
            q.points_threshold,
        ),
        top_scorer: report::top_scorer_section(&top, &q.top_scorer_country),
    })
}

/// Write the sections: the first replaces the file, the rest are appended.
pub async fn write_report(writer: &ReportWriter, report: &Report) -> anyhow::Result<()> {
    writer.write(&report.heaviest).await?;
    for section in [&report.tallest, &report.high_scoring, &report.top_scorer] {
        writer.append(section).await?;
    }
    info!("Report written to {}", writer.path().display());
    Ok(())
}

/// Run the whole pipeline with the given configuration.
pub async fn run(config: &Config) -> anyhow::Result<Report> {
    let players = load_players(&config.inputs.players)
        .await
        .context("failed to load players")?;
    let games = load_games(&config.inputs.games)
        .await
        .context("failed to load games")?;

    let report = build_report(&players, &games, config).context("failed to answer queries")?;

    let writer = ReportWriter::new(&config.output.report);
    write_report(&writer, &report).await?;
    Ok(report)
}
