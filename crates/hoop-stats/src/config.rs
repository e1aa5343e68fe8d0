// Configuration loading (stats.toml).
//
// The file is optional: without it every value falls back to the fixed
// inputs, output and query constants below.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "stats.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inputs: InputPaths,
    pub output: OutputConfig,
    pub queries: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub players: PathBuf,
    pub games: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            players: PathBuf::from("players.csv"),
            games: PathBuf::from("games.csv"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub report: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report: PathBuf::from("stats.txt"),
        }
    }
}

/// Constants the four report questions are asked with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// How many of the heaviest male players to list.
    pub heaviest_limit: usize,
    /// Country whose tallest female player is reported.
    pub tallest_country: String,
    /// Country whose high-scoring wins are counted.
    pub high_scoring_country: String,
    /// A win counts as high-scoring when its total is strictly above this.
    pub points_threshold: u32,
    /// Country whose wins are searched for the top male scorer.
    pub top_scorer_country: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            heaviest_limit: 5,
            tallest_country: "China".into(),
            high_scoring_country: "China".into(),
            points_threshold: 50,
            top_scorer_country: "Canada".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `stats.toml` from `base_dir`, falling back to defaults
/// when the file does not exist. Relative paths in the file are resolved
/// against `base_dir`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(CONFIG_FILE);
    let mut config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        parse_config(&text).map_err(|source| ConfigError::ParseError {
            path: path.clone(),
            source,
        })?
    } else {
        Config::default()
    };
    validate(&config)?;

    config.inputs.players = base_dir.join(&config.inputs.players);
    config.inputs.games = base_dir.join(&config.inputs.games);
    config.output.report = base_dir.join(&config.output.report);
    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    load_config_from(&cwd)
}

fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let q = &config.queries;
    if q.heaviest_limit == 0 {
        return Err(ConfigError::ValidationError {
            field: "queries.heaviest_limit".into(),
            message: "must be greater than 0".into(),
        });
    }

    let countries: &[(&str, &str)] = &[
        ("queries.tallest_country", q.tallest_country.as_str()),
        ("queries.high_scoring_country", q.high_scoring_country.as_str()),
        ("queries.top_scorer_country", q.top_scorer_country.as_str()),
    ];
    for (name, val) in countries {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    let paths: &[(&str, &Path)] = &[
        ("inputs.players", config.inputs.players.as_path()),
        ("inputs.games", config.inputs.games.as_path()),
        ("output.report", config.output.report.as_path()),
    ];
    for (name, val) in paths {
        if val.file_name().is_none() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must name a file, got {:?}", val.display().to_string()),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
