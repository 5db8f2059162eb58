//! Season-level betting-trends aggregation.
//!
//! A single pass over the completed games produces every report family:
//! - **Straight-up**: win/loss by final score, counted for every game
//! - **Against the spread**: cover/push by spread-adjusted margin, only
//!   for games with a posted finite spread
//! - **Over/under**: combined score vs the posted total, split by
//!   overtime
//! - **Spread ranges**: favorite-vs-dog outcomes bucketed by |spread|
//! - **Situational**: blowout games (margin ≥ 21) and their totals
//!
//! The central correctness property: a game without a betting line still
//! counts in the straight-up aggregates. Historical weeks often carry
//! lines for only a fraction of games, and the straight-up numbers must
//! not degrade when that happens.

use crate::model::{BettingLine, Game, LineBook};

use super::report::TrendsReport;

/// Margin of victory at or above which a game counts as a blowout.
const BLOWOUT_MARGIN: u32 = 21;

/// A combined score within this distance of the posted total is a push.
/// Totals only; spread pushes use exact equality.
const TOTAL_PUSH_TOLERANCE: f64 = 0.5;

// ── Public API ───────────────────────────────────────────────────────────────

/// Compute the season trends report for a set of games and their betting
/// lines.
///
/// Pure and total: inputs are never mutated, games missing a score are
/// skipped, and malformed line data (NaN spread, zero total) degrades the
/// affected game to line-less rather than failing the batch. `games` may
/// be empty, in which case every counter and percentage is zero.
pub fn compute_trends(games: &[Game], lines: &LineBook) -> TrendsReport {
    games
        .iter()
        .fold(TrendsAccumulator::default(), |mut acc, game| {
            acc.record(game, lines.line_for(game));
            acc
        })
        .finish()
}

// ── Result classification ────────────────────────────────────────────────────

/// Straight-up outcome of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuResult {
    HomeWin,
    AwayWin,
    Tie,
}

fn su_result(home_score: u32, away_score: u32) -> SuResult {
    if home_score > away_score {
        SuResult::HomeWin
    } else if away_score > home_score {
        SuResult::AwayWin
    } else {
        SuResult::Tie
    }
}

/// Which side the spread favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FavoriteSide {
    Home,
    Away,
    PickEm,
}

impl FavoriteSide {
    /// `Some(true)` when home is favored, `Some(false)` when away is,
    /// `None` for a pick'em.
    fn home_is_favorite(self) -> Option<bool> {
        match self {
            FavoriteSide::Home => Some(true),
            FavoriteSide::Away => Some(false),
            FavoriteSide::PickEm => None,
        }
    }
}

/// Negative spread ⇒ home favored, positive ⇒ away favored, zero ⇒ pick'em.
fn favorite_side(spread: f64) -> FavoriteSide {
    if spread < 0.0 {
        FavoriteSide::Home
    } else if spread > 0.0 {
        FavoriteSide::Away
    } else {
        FavoriteSide::PickEm
    }
}

/// Outcome against the spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AtsResult {
    HomeCovers,
    AwayCovers,
    Push,
}

/// Classify a final score against the spread.
///
/// The favorite covers only by beating the number outright; landing on it
/// exactly is a push. Pick'em games have no number to beat, so the
/// straight-up winner covers and a tie pushes.
fn ats_result(home_score: u32, away_score: u32, spread: f64) -> AtsResult {
    let home_margin = f64::from(home_score) - f64::from(away_score);
    match favorite_side(spread) {
        FavoriteSide::PickEm => match su_result(home_score, away_score) {
            SuResult::HomeWin => AtsResult::HomeCovers,
            SuResult::AwayWin => AtsResult::AwayCovers,
            SuResult::Tie => AtsResult::Push,
        },
        FavoriteSide::Home => {
            let number = -spread;
            if home_margin > number {
                AtsResult::HomeCovers
            } else if home_margin == number {
                AtsResult::Push
            } else {
                AtsResult::AwayCovers
            }
        }
        FavoriteSide::Away => {
            let away_margin = -home_margin;
            if away_margin > spread {
                AtsResult::AwayCovers
            } else if away_margin == spread {
                AtsResult::Push
            } else {
                AtsResult::HomeCovers
            }
        }
    }
}

/// Outcome against the posted total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TotalsResult {
    Over,
    Under,
    Push,
}

fn totals_result(total_score: u32, total_line: f64) -> TotalsResult {
    let total = f64::from(total_score);
    if (total - total_line).abs() < TOTAL_PUSH_TOLERANCE {
        TotalsResult::Push
    } else if total > total_line {
        TotalsResult::Over
    } else {
        TotalsResult::Under
    }
}

// ── Accumulator ──────────────────────────────────────────────────────────────

/// Running counters for one pass over the games. Folded over the game
/// list and finished into an immutable report; nothing here outlives the
/// call.
#[derive(Debug, Default)]
struct TrendsAccumulator {
    report: TrendsReport,
}

impl TrendsAccumulator {
    fn finish(mut self) -> TrendsReport {
        self.report.finalize();
        self.report
    }

    fn record(&mut self, game: &Game, line: Option<&BettingLine>) {
        let Some((home_score, away_score)) = game.final_score() else {
            return; // not completed
        };

        let su = su_result(home_score, away_score);
        let total_score = home_score + away_score;
        let margin = home_score.abs_diff(away_score);

        // Straight-up home/away counters come first and unconditionally:
        // these must hold even when no game in the batch carries a line.
        self.record_straight_up_sides(su);

        let Some(spread) = line.and_then(BettingLine::effective_spread) else {
            return;
        };
        let favorite = favorite_side(spread);
        let ats = ats_result(home_score, away_score, spread);
        let totals = line
            .and_then(BettingLine::effective_total)
            .map(|t| totals_result(total_score, t));

        self.record_ats_sides(ats);
        if let Some(home_is_favorite) = favorite.home_is_favorite() {
            self.record_straight_up_splits(su, home_is_favorite);
            self.record_ats_splits(ats, home_is_favorite);
        }
        if let Some(totals) = totals {
            self.record_totals(totals, game.went_to_overtime());
        }
        self.record_spread_bucket(spread, su, favorite);
        if margin >= BLOWOUT_MARGIN {
            self.record_blowout(totals);
        }
    }

    fn record_straight_up_sides(&mut self, su: SuResult) {
        let sides = &mut self.report.straight_up;
        match su {
            SuResult::HomeWin => {
                sides.home_teams.win();
                sides.away_teams.loss();
            }
            SuResult::AwayWin => {
                sides.home_teams.loss();
                sides.away_teams.win();
            }
            SuResult::Tie => {
                sides.home_teams.tie();
                sides.away_teams.tie();
            }
        }
    }

    /// Favorite/dog and home-away × favorite-dog splits, straight-up.
    /// Ties count symmetrically on both sides of each pairing.
    fn record_straight_up_splits(&mut self, su: SuResult, home_is_favorite: bool) {
        let splits = &mut self.report.straight_up;
        match su {
            SuResult::Tie => {
                splits.favorites.tie();
                splits.dogs.tie();
                if home_is_favorite {
                    splits.home_favorites.tie();
                    splits.away_dogs.tie();
                } else {
                    splits.away_favorites.tie();
                    splits.home_dogs.tie();
                }
            }
            SuResult::HomeWin | SuResult::AwayWin => {
                let home_won = su == SuResult::HomeWin;
                let favorite_won = home_won == home_is_favorite;
                if favorite_won {
                    splits.favorites.win();
                    splits.dogs.loss();
                } else {
                    splits.favorites.loss();
                    splits.dogs.win();
                }
                if home_is_favorite {
                    if home_won {
                        splits.home_favorites.win();
                        splits.away_dogs.loss();
                    } else {
                        splits.home_favorites.loss();
                        splits.away_dogs.win();
                    }
                } else if home_won {
                    splits.away_favorites.loss();
                    splits.home_dogs.win();
                } else {
                    splits.away_favorites.win();
                    splits.home_dogs.loss();
                }
            }
        }
    }

    fn record_ats_sides(&mut self, ats: AtsResult) {
        let sides = &mut self.report.against_the_spread;
        match ats {
            AtsResult::HomeCovers => {
                sides.home_teams.win();
                sides.away_teams.loss();
            }
            AtsResult::AwayCovers => {
                sides.home_teams.loss();
                sides.away_teams.win();
            }
            AtsResult::Push => {
                sides.home_teams.push();
                sides.away_teams.push();
            }
        }
    }

    fn record_ats_splits(&mut self, ats: AtsResult, home_is_favorite: bool) {
        let splits = &mut self.report.against_the_spread;
        match ats {
            AtsResult::Push => {
                splits.favorites.push();
                splits.dogs.push();
                if home_is_favorite {
                    splits.home_favorites.push();
                    splits.away_dogs.push();
                } else {
                    splits.away_favorites.push();
                    splits.home_dogs.push();
                }
            }
            AtsResult::HomeCovers | AtsResult::AwayCovers => {
                let home_covered = ats == AtsResult::HomeCovers;
                let favorite_covered = home_covered == home_is_favorite;
                if favorite_covered {
                    splits.favorites.win();
                    splits.dogs.loss();
                } else {
                    splits.favorites.loss();
                    splits.dogs.win();
                }
                if home_is_favorite {
                    if home_covered {
                        splits.home_favorites.win();
                        splits.away_dogs.loss();
                    } else {
                        splits.home_favorites.loss();
                        splits.away_dogs.win();
                    }
                } else if home_covered {
                    splits.away_favorites.loss();
                    splits.home_dogs.win();
                } else {
                    splits.away_favorites.win();
                    splits.home_dogs.loss();
                }
            }
        }
    }

    fn record_totals(&mut self, totals: TotalsResult, overtime: bool) {
        let ou = &mut self.report.over_under;
        let slice = if overtime {
            &mut ou.overtime_games
        } else {
            &mut ou.non_overtime_games
        };
        match totals {
            TotalsResult::Over => {
                slice.over();
                ou.all_games.over();
            }
            TotalsResult::Under => {
                slice.under();
                ou.all_games.under();
            }
            TotalsResult::Push => {
                slice.push();
                ou.all_games.push();
            }
        }
    }

    /// Spread-size bucket: every lined game counts toward `games`
    /// (pick'em lands in `small`); `fav_wins`/`dog_wins` track the
    /// straight-up winner and only exist where there is a favorite.
    fn record_spread_bucket(&mut self, spread: f64, su: SuResult, favorite: FavoriteSide) {
        let bucket = self.report.spread_ranges.bucket_mut(spread.abs());
        bucket.games += 1;
        let Some(home_is_favorite) = favorite.home_is_favorite() else {
            return;
        };
        match su {
            SuResult::HomeWin if home_is_favorite => bucket.fav_wins += 1,
            SuResult::HomeWin => bucket.dog_wins += 1,
            SuResult::AwayWin if !home_is_favorite => bucket.fav_wins += 1,
            SuResult::AwayWin => bucket.dog_wins += 1,
            SuResult::Tie => {}
        }
    }

    fn record_blowout(&mut self, totals: Option<TotalsResult>) {
        let blowouts = &mut self.report.situational.blowouts;
        blowouts.games += 1;
        match totals {
            Some(TotalsResult::Over) => blowouts.overs += 1,
            Some(TotalsResult::Under) => blowouts.unders += 1,
            Some(TotalsResult::Push) => blowouts.pushes += 1,
            None => {}
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
