// point-distance entry point: `point-distance x1 y1 x2 y2`.

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use point_distance::{record_distance, PointsInput, DATA_DIR};

/// Compute the distance between two points and record it in dataPoints/points.txt.
#[derive(Parser)]
#[command(name = "point-distance", version)]
struct Cli {
    /// X coordinate of the first point
    #[arg(allow_hyphen_values = true)]
    x1: String,
    /// Y coordinate of the first point
    #[arg(allow_hyphen_values = true)]
    y1: String,
    /// X coordinate of the second point
    #[arg(allow_hyphen_values = true)]
    x2: String,
    /// Y coordinate of the second point
    #[arg(allow_hyphen_values = true)]
    y2: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let input = PointsInput {
        x1: cli.x1,
        y1: cli.y1,
        x2: cli.x2,
        y2: cli.y2,
    };

    let path = record_distance(Path::new(DATA_DIR), &input)
        .await
        .context("failed to record distance")?;
    info!("Distance recorded in {}", path.display());
    info!("program completed!");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("point_distance=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
