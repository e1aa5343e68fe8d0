// hoop-stats entry point.
//
// 1. Initialize tracing (stderr)
// 2. Load config (stats.toml, optional)
// 3. Load players.csv and games.csv
// 4. Answer the four questions
// 5. Write stats.txt

use anyhow::Context;
use tracing::{error, info};

use hoop_stats::{app, config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("hoop-stats starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Inputs: players={}, games={}; report={}",
        config.inputs.players.display(),
        config.inputs.games.display(),
        config.output.report.display()
    );

    if let Err(e) = app::run(&config).await {
        error!("Stats run failed: {:#}", e);
        return Err(e);
    }

    info!("tasks completed no errors");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hoop_stats=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
