use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::DEFAULT_MIN_WORD_LENGTH;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub search: SearchConfig,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    /// Seconds the player has to enter words; 0 skips input entirely
    pub timer_duration: u64,
    /// Fixed board instead of a random roll, e.g. `"T---/-E--/--S-/---T"`
    pub grid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub min_word_length: usize,
    pub parallel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./sowpods.txt".to_string()),
            timer_duration: env::var("TIMER_DURATION")
                .unwrap_or_else(|_| "180".to_string())
                .parse()
                .context("TIMER_DURATION must be a number of seconds")?,
            grid: env::var("GRID").ok().filter(|g| !g.trim().is_empty()),
        };

        let search = SearchConfig {
            min_word_length: env::var("MIN_WORD_LENGTH")
                .unwrap_or_else(|_| DEFAULT_MIN_WORD_LENGTH.to_string())
                .parse()
                .context("MIN_WORD_LENGTH must be a number")?,
            parallel: env::var("PARALLEL_SEARCH")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .context("PARALLEL_SEARCH must be true or false")?,
        };

        let output = parse_output_format(
            &env::var("OUTPUT_FORMAT").unwrap_or_else(|_| "table".to_string()),
        )?;

        Ok(Config {
            game,
            search,
            output,
        })
    }

    pub fn dictionary_path(&self) -> &str {
        &self.game.dictionary_path
    }
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.trim().to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        other => bail!("OUTPUT_FORMAT must be 'table' or 'json', got '{}'", other),
    }
}
