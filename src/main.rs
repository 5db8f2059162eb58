use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

mod config;
mod dataset;
mod model;
mod summary;
mod trends;

use config::{Config, FORMAT_JSON};
use model::LineBook;
use trends::compute_trends;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let mut games = dataset::load_games(&config.games)?;
    info!("Loaded {} games from {}", games.len(), config.games);

    if let Some(week) = config.week {
        games.retain(|g| g.week == week);
        info!("Week {} filter leaves {} games", week, games.len());
    }

    let completed = games.iter().filter(|g| g.is_completed()).count();
    if completed < games.len() {
        warn!(
            "{} of {} games lack final scores and will be skipped",
            games.len() - completed,
            games.len()
        );
    }

    let lines = match &config.lines {
        Some(path) => {
            let book = dataset::load_lines(path)?;
            if book.is_empty() {
                warn!("Lines file {path} contained no usable lines");
            } else {
                info!("Loaded {} betting lines from {}", book.len(), path);
            }
            book
        }
        None => {
            info!("No lines file supplied; report covers straight-up trends only");
            LineBook::new()
        }
    };

    let report = compute_trends(&games, &lines);
    info!("Computed trends over {completed} completed games");

    if config.format == FORMAT_JSON {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", summary::render(&report));
    }

    if let Some(path) = &config.output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report to {path}"))?;
        info!("Report written to {path}");
    }

    Ok(())
}
