use std::{io::BufRead, time::Duration};

use anyhow::{Context, Result};
use boggle_engine::{
    config::{Config, OutputFormat},
    game::{GridGenerator, RoundResult, SearchOptions, Solver},
    Grid, Lexicon,
};
use serde::Serialize;
use tokio::{
    sync::mpsc,
    time::{timeout_at, Instant},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Everything printed at the end of a round in JSON mode
#[derive(Serialize)]
struct Report<'a> {
    grid: &'a Grid,
    result: &'a RoundResult,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle=info,boggle_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Boggle round...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let lexicon = Lexicon::load(config.dictionary_path())
        .await
        .with_context(|| format!("could not load dictionary {}", config.dictionary_path()))?;

    let grid = match &config.game.grid {
        Some(layout) => layout
            .parse::<Grid>()
            .with_context(|| format!("GRID is not a valid board: {:?}", layout))?,
        None => GridGenerator::generate(),
    };
    println!("{}\n", grid);

    let player_words = if config.game.timer_duration > 0 {
        collect_words(Duration::from_secs(config.game.timer_duration)).await
    } else {
        Vec::new()
    };

    let solver = Solver::with_options(
        &lexicon,
        SearchOptions {
            min_length: config.search.min_word_length,
            ..SearchOptions::default()
        },
    );
    let found = if config.search.parallel {
        solver.find_all_parallel(&grid)
    } else {
        solver.find_all(&grid)
    };
    tracing::info!("Solver found {} words", found.len());

    let result = RoundResult::compare(&player_words, &found);

    match config.output {
        OutputFormat::Table => println!("{}", result),
        OutputFormat::Json => {
            let report = Report {
                grid: &grid,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Read words from stdin until the timer runs out or input ends
async fn collect_words(limit: Duration) -> Vec<String> {
    println!(
        "Enter words separated by spaces or newlines. You have {} seconds.",
        limit.as_secs()
    );

    let deadline = Instant::now() + limit;
    let mut lines = spawn_stdin_reader();
    let mut words = Vec::new();

    loop {
        match timeout_at(deadline, lines.recv()).await {
            Ok(Some(line)) => words.extend(line.split_whitespace().map(str::to_string)),
            Ok(None) => break,
            Err(_) => {
                println!("\nTime's up!");
                break;
            }
        }
    }

    tracing::info!("Collected {} entries from the player", words.len());
    words
}

/// Blocking stdin reads live on their own thread so the timer can abandon them
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel::<String>(100);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx
}
