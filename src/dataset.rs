//! JSON dataset ingestion.
//!
//! The upstream sports-data export ships two files: a season's games and
//! the betting lines posted for them, both camelCase JSON arrays. Records
//! tolerate gaps: a game without final points never counts as completed,
//! and a line without a number skips the corresponding aggregate.
//! Identity fields (teams, week) are required.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::model::{BettingLine, Game, LineBook, LineKey};

/// One game row of the upstream export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub home_team: String,
    pub away_team: String,
    pub week: u16,
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub home_points: Option<u32>,
    #[serde(default)]
    pub away_points: Option<u32>,
    #[serde(default)]
    pub periods: Option<u32>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
}

impl From<GameRecord> for Game {
    fn from(rec: GameRecord) -> Self {
        Game {
            home_team: rec.home_team,
            away_team: rec.away_team,
            week: rec.week,
            home_score: rec.home_points,
            away_score: rec.away_points,
            periods: rec.periods,
        }
    }
}

/// One betting-line row of the upstream export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub home_team: String,
    pub away_team: String,
    pub week: u16,
    #[serde(default)]
    pub spread: Option<f64>,
    #[serde(default)]
    pub over_under: Option<f64>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// Parse a games JSON array.
pub fn parse_games(json: &str) -> Result<Vec<GameRecord>> {
    serde_json::from_str(json).context("Failed to parse games JSON")
}

/// Load the games file and convert into the model type.
pub fn load_games(path: &str) -> Result<Vec<Game>> {
    let raw = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read games file {path}"))?;
    let records = parse_games(&raw)?;
    if let Some(season) = records.iter().find_map(|r| r.season) {
        info!("Dataset season: {season}");
    }
    if let Some((first, last)) = date_range(&records) {
        info!(
            "Kickoffs span {} to {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }
    Ok(records.into_iter().map(Game::from).collect())
}

/// Parse a lines JSON array into a keyed book.
///
/// Collision policy: the first line for a (home, away, week) triple wins;
/// later duplicates are logged and dropped. Duplicates are a data
/// problem worth surfacing, not worth failing a whole season run over.
pub fn parse_lines(json: &str) -> Result<LineBook> {
    let records: Vec<LineRecord> = serde_json::from_str(json).context("Failed to parse lines JSON")?;
    let mut book = LineBook::new();
    for rec in records {
        let LineRecord {
            home_team,
            away_team,
            week,
            spread,
            over_under,
            provider,
        } = rec;
        let key = LineKey::new(home_team, away_team, week);
        let line = BettingLine { spread, over_under };
        if let Err(err) = book.insert(key, line) {
            match provider {
                Some(p) => warn!("Skipping {err} (provider {p})"),
                None => warn!("Skipping {err}"),
            }
        }
    }
    Ok(book)
}

/// Load the lines file into a `LineBook`.
pub fn load_lines(path: &str) -> Result<LineBook> {
    let raw = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read lines file {path}"))?;
    parse_lines(&raw)
}

/// First and last kickoff across the records, for log output.
pub fn date_range(records: &[GameRecord]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let mut dates = records.iter().filter_map(|r| r.start_date);
    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_game_record() {
        let json = r#"[{
            "homeTeam": "Georgia",
            "awayTeam": "Clemson",
            "week": 1,
            "season": 2024,
            "homePoints": 34,
            "awayPoints": 3,
            "periods": 4,
            "startDate": "2024-08-31T19:30:00Z"
        }]"#;
        let records = parse_games(json).unwrap();
        assert_eq!(records.len(), 1);
        let game = Game::from(records[0].clone());
        assert_eq!(game.home_team, "Georgia");
        assert_eq!(game.final_score(), Some((34, 3)));
        assert!(!game.went_to_overtime());
    }

    #[test]
    fn test_parse_game_without_points_is_incomplete() {
        let json = r#"[{"homeTeam": "Army", "awayTeam": "Navy", "week": 15}]"#;
        let records = parse_games(json).unwrap();
        let game = Game::from(records[0].clone());
        assert!(!game.is_completed());
    }

    #[test]
    fn test_parse_games_rejects_missing_identity() {
        // A record without team names is malformed input, not a gap
        let json = r#"[{"week": 3, "homePoints": 10, "awayPoints": 7}]"#;
        assert!(parse_games(json).is_err());
    }

    #[test]
    fn test_parse_line_record_values() {
        let json = r#"[{
            "homeTeam": "Alabama",
            "awayTeam": "Auburn",
            "week": 13,
            "spread": -6.5,
            "overUnder": 48.5,
            "provider": "consensus"
        }]"#;
        let book = parse_lines(json).unwrap();
        let line = book
            .get(&LineKey::new("Alabama", "Auburn", 13))
            .expect("line should be present");
        assert_relative_eq!(line.spread.unwrap(), -6.5, epsilon = 1e-12);
        assert_relative_eq!(line.over_under.unwrap(), 48.5, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_lines_keeps_first_on_collision() {
        let json = r#"[
            {"homeTeam": "Texas", "awayTeam": "Oklahoma", "week": 6, "spread": -3.0},
            {"homeTeam": "Texas", "awayTeam": "Oklahoma", "week": 6, "spread": -4.5}
        ]"#;
        let book = parse_lines(json).unwrap();
        assert_eq!(book.len(), 1);
        let line = book.get(&LineKey::new("Texas", "Oklahoma", 6)).unwrap();
        assert_relative_eq!(line.spread.unwrap(), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_line_without_numbers() {
        let json = r#"[{"homeTeam": "Rice", "awayTeam": "Tulsa", "week": 9}]"#;
        let book = parse_lines(json).unwrap();
        let line = book.get(&LineKey::new("Rice", "Tulsa", 9)).unwrap();
        assert_eq!(line.effective_spread(), None);
        assert_eq!(line.effective_total(), None);
    }

    #[test]
    fn test_date_range() {
        let json = r#"[
            {"homeTeam": "A", "awayTeam": "B", "week": 1, "startDate": "2024-09-07T16:00:00Z"},
            {"homeTeam": "C", "awayTeam": "D", "week": 1, "startDate": "2024-08-31T19:30:00Z"},
            {"homeTeam": "E", "awayTeam": "F", "week": 2}
        ]"#;
        let records = parse_games(json).unwrap();
        let (first, last) = date_range(&records).unwrap();
        assert_eq!(first.to_rfc3339(), "2024-08-31T19:30:00+00:00");
        assert_eq!(last.to_rfc3339(), "2024-09-07T16:00:00+00:00");
        assert!(date_range(&records[2..]).is_none());
    }
}
