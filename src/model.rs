use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A single college-football game as supplied by the upstream dataset.
///
/// Scores are optional: a game with either score missing has not finished
/// and is skipped by every aggregate. Identity fields (teams, week) are
/// always required; together they form the betting-line lookup key.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
    pub week: u16,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// Quarters played. Regulation is 4; anything above means overtime.
    pub periods: Option<u32>,
}

impl Game {
    /// Both final scores, or `None` when the game is not completed.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        Some((self.home_score?, self.away_score?))
    }

    pub fn is_completed(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn went_to_overtime(&self) -> bool {
        self.periods.is_some_and(|p| p > 4)
    }
}

/// Betting line for one game.
///
/// Spread sign convention: negative ⇒ home team favored by `|spread|`,
/// positive ⇒ away team favored, zero ⇒ pick'em.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BettingLine {
    pub spread: Option<f64>,
    pub over_under: Option<f64>,
}

impl BettingLine {
    /// The spread, if present and finite. A NaN or infinite spread makes
    /// the game line-less for every spread-dependent aggregate.
    pub fn effective_spread(&self) -> Option<f64> {
        self.spread.filter(|s| s.is_finite())
    }

    /// The posted total, if present, finite, and positive. Zero is the
    /// upstream dataset's "no total posted" marker.
    pub fn effective_total(&self) -> Option<f64> {
        self.over_under.filter(|t| t.is_finite() && *t > 0.0)
    }
}

/// Lookup key for a game's betting line: (home, away, week) as a value
/// type rather than a concatenated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub home_team: String,
    pub away_team: String,
    pub week: u16,
}

impl LineKey {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>, week: u16) -> Self {
        LineKey {
            home_team: home_team.into(),
            away_team: away_team.into(),
            week,
        }
    }

    pub fn for_game(game: &Game) -> Self {
        LineKey::new(game.home_team.clone(), game.away_team.clone(), game.week)
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} (week {})",
            self.home_team, self.away_team, self.week
        )
    }
}

/// Errors raised while assembling the input datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Two lines were supplied for the same (home, away, week) triple.
    #[error("duplicate betting line for {0}")]
    DuplicateLine(LineKey),
}

/// Keyed collection of betting lines.
///
/// `insert` rejects duplicate keys instead of overwriting: two lines for
/// the same matchup are a data problem the caller must decide about, not
/// something to resolve silently.
#[derive(Debug, Clone, Default)]
pub struct LineBook {
    lines: HashMap<LineKey, BettingLine>,
}

impl LineBook {
    pub fn new() -> Self {
        LineBook::default()
    }

    pub fn insert(&mut self, key: LineKey, line: BettingLine) -> Result<(), DatasetError> {
        if self.lines.contains_key(&key) {
            return Err(DatasetError::DuplicateLine(key));
        }
        self.lines.insert(key, line);
        Ok(())
    }

    pub fn get(&self, key: &LineKey) -> Option<&BettingLine> {
        self.lines.get(key)
    }

    pub fn line_for(&self, game: &Game) -> Option<&BettingLine> {
        self.get(&LineKey::for_game(game))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
