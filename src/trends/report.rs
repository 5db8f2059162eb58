//! Report value types.
//!
//! Field names and nesting here are a compatibility contract with the
//! downstream UI: everything serializes camelCase, and each leaf record
//! carries its rounded percentage alongside the raw counts.

use serde::Serialize;

/// Straight-up record for one slicing category (win/loss by final score).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub percentage: u32,
}

impl SideRecord {
    pub(crate) fn win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn loss(&mut self) {
        self.losses += 1;
    }

    pub(crate) fn tie(&mut self) {
        self.ties += 1;
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub(crate) fn finalize(&mut self) {
        self.percentage = round_pct(self.wins, self.total());
    }
}

/// Against-the-spread record for one slicing category (win/loss/push by
/// spread-adjusted margin).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsRecord {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub percentage: u32,
}

impl AtsRecord {
    pub(crate) fn win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn loss(&mut self) {
        self.losses += 1;
    }

    pub(crate) fn push(&mut self) {
        self.pushes += 1;
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }

    pub(crate) fn finalize(&mut self) {
        self.percentage = round_pct(self.wins, self.total());
    }
}

/// Over/under record for one game slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsRecord {
    pub overs: u32,
    pub unders: u32,
    pub pushes: u32,
    pub over_percentage: u32,
    pub under_percentage: u32,
}

impl TotalsRecord {
    pub(crate) fn over(&mut self) {
        self.overs += 1;
    }

    pub(crate) fn under(&mut self) {
        self.unders += 1;
    }

    pub(crate) fn push(&mut self) {
        self.pushes += 1;
    }

    pub fn total(&self) -> u32 {
        self.overs + self.unders + self.pushes
    }

    pub(crate) fn finalize(&mut self) {
        let total = self.total();
        self.over_percentage = round_pct(self.overs, total);
        self.under_percentage = round_pct(self.unders, total);
    }
}

/// One |spread| bucket: how often the favorite won outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadBucket {
    pub games: u32,
    pub fav_wins: u32,
    pub dog_wins: u32,
    pub fav_percentage: u32,
}

impl SpreadBucket {
    pub(crate) fn finalize(&mut self) {
        self.fav_percentage = round_pct(self.fav_wins, self.fav_wins + self.dog_wins);
    }
}

/// Blowout games (margin ≥ 21) and how their totals resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlowoutRecord {
    pub games: u32,
    pub overs: u32,
    pub unders: u32,
    pub pushes: u32,
}

/// Straight-up results sliced eight ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StraightUpTrends {
    pub home_teams: SideRecord,
    pub away_teams: SideRecord,
    pub favorites: SideRecord,
    pub dogs: SideRecord,
    pub home_favorites: SideRecord,
    pub away_favorites: SideRecord,
    pub home_dogs: SideRecord,
    pub away_dogs: SideRecord,
}

impl StraightUpTrends {
    fn finalize(&mut self) {
        self.home_teams.finalize();
        self.away_teams.finalize();
        self.favorites.finalize();
        self.dogs.finalize();
        self.home_favorites.finalize();
        self.away_favorites.finalize();
        self.home_dogs.finalize();
        self.away_dogs.finalize();
    }
}

/// Against-the-spread results sliced the same eight ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsTrends {
    pub home_teams: AtsRecord,
    pub away_teams: AtsRecord,
    pub favorites: AtsRecord,
    pub dogs: AtsRecord,
    pub home_favorites: AtsRecord,
    pub away_favorites: AtsRecord,
    pub home_dogs: AtsRecord,
    pub away_dogs: AtsRecord,
}

impl AtsTrends {
    fn finalize(&mut self) {
        self.home_teams.finalize();
        self.away_teams.finalize();
        self.favorites.finalize();
        self.dogs.finalize();
        self.home_favorites.finalize();
        self.away_favorites.finalize();
        self.home_dogs.finalize();
        self.away_dogs.finalize();
    }
}

/// Over/under results split by whether the game reached overtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverUnderTrends {
    pub overtime_games: TotalsRecord,
    pub non_overtime_games: TotalsRecord,
    pub all_games: TotalsRecord,
}

impl OverUnderTrends {
    fn finalize(&mut self) {
        self.overtime_games.finalize();
        self.non_overtime_games.finalize();
        self.all_games.finalize();
    }
}

/// Favorite-vs-dog outcomes bucketed by |spread| size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadRanges {
    /// |spread| ≤ 3
    pub small: SpreadBucket,
    /// 3 < |spread| ≤ 7
    pub medium: SpreadBucket,
    /// 7 < |spread| ≤ 14
    pub large: SpreadBucket,
    /// |spread| > 14
    pub huge: SpreadBucket,
}

impl SpreadRanges {
    /// The bucket an absolute spread falls into (thresholds 3 / 7 / 14).
    pub(crate) fn bucket_mut(&mut self, spread_abs: f64) -> &mut SpreadBucket {
        if spread_abs <= 3.0 {
            &mut self.small
        } else if spread_abs <= 7.0 {
            &mut self.medium
        } else if spread_abs <= 14.0 {
            &mut self.large
        } else {
            &mut self.huge
        }
    }

    fn finalize(&mut self) {
        self.small.finalize();
        self.medium.finalize();
        self.large.finalize();
        self.huge.finalize();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Situational {
    pub blowouts: BlowoutRecord,
}

/// The full trends report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsReport {
    pub straight_up: StraightUpTrends,
    pub against_the_spread: AtsTrends,
    pub over_under: OverUnderTrends,
    pub spread_ranges: SpreadRanges,
    pub situational: Situational,
}

impl TrendsReport {
    /// Fill in every derived percentage. Idempotent.
    pub(crate) fn finalize(&mut self) {
        self.straight_up.finalize();
        self.against_the_spread.finalize();
        self.over_under.finalize();
        self.spread_ranges.finalize();
    }
}

/// Rounded win percentage: `round(wins / total * 100)`, 0 on an empty
/// denominator. Rounds half away from zero, matching the behaviour the
/// downstream UI already relies on.
pub(crate) fn round_pct(wins: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(wins) / f64::from(total) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_pct_zero_denominator() {
        assert_eq!(round_pct(0, 0), 0);
    }

    #[test]
    fn test_round_pct_exact() {
        // 3 of 5 → 60, never 59 or 61
        assert_eq!(round_pct(3, 5), 60);
        assert_eq!(round_pct(1, 4), 25);
        assert_eq!(round_pct(5, 5), 100);
    }

    #[test]
    fn test_round_pct_half_rounds_up() {
        // 1 of 8 = 12.5% → 13
        assert_eq!(round_pct(1, 8), 13);
        // 5 of 8 = 62.5% → 63
        assert_eq!(round_pct(5, 8), 63);
    }

    #[test]
    fn test_side_record_finalize() {
        let mut rec = SideRecord {
            wins: 6,
            losses: 3,
            ties: 1,
            percentage: 0,
        };
        rec.finalize();
        assert_eq!(rec.percentage, 60);
    }

    #[test]
    fn test_totals_record_finalize_both_percentages() {
        let mut rec = TotalsRecord {
            overs: 3,
            unders: 1,
            pushes: 1,
            over_percentage: 0,
            under_percentage: 0,
        };
        rec.finalize();
        assert_eq!(rec.over_percentage, 60);
        assert_eq!(rec.under_percentage, 20);
    }

    #[test]
    fn test_default_report_is_all_zero() {
        let mut report = TrendsReport::default();
        report.finalize();
        assert_eq!(report, TrendsReport::default());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = TrendsReport::default();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("straightUp").is_some());
        assert!(json.get("againstTheSpread").is_some());
        assert!(json.get("overUnder").is_some());
        assert!(json.get("spreadRanges").is_some());
        assert!(json.get("situational").is_some());
        assert!(json["straightUp"].get("homeTeams").is_some());
        assert!(json["straightUp"]["homeFavorites"].get("ties").is_some());
        assert!(json["againstTheSpread"]["awayDogs"].get("pushes").is_some());
        assert!(json["overUnder"]["overtimeGames"].get("overPercentage").is_some());
        assert!(json["overUnder"]["nonOvertimeGames"].get("underPercentage").is_some());
        assert!(json["spreadRanges"]["small"].get("favWins").is_some());
        assert!(json["situational"]["blowouts"].get("games").is_some());
    }
}
