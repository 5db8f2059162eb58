//! Plain-text rendering of a trends report.
//!
//! One fixed-width table per report family, suitable for a terminal or a
//! monospaced paste. Pure string building; the caller decides where it
//! goes.

use std::fmt::Write;

use crate::trends::report::{
    AtsRecord, SideRecord, SpreadBucket, TotalsRecord, TrendsReport,
};

/// Render the full report.
pub fn render(report: &TrendsReport) -> String {
    let mut out = String::new();

    out.push_str("College Football Betting Trends\n");
    out.push_str("===============================\n\n");

    render_straight_up(&mut out, report);
    render_ats(&mut out, report);
    render_over_under(&mut out, report);
    render_spread_ranges(&mut out, report);
    render_situational(&mut out, report);

    out
}

fn render_straight_up(out: &mut String, report: &TrendsReport) {
    let su = &report.straight_up;
    let _ = writeln!(out, "{:<18} {:>6} {:>6} {:>6} {:>6}", "Straight Up", "W", "L", "T", "Pct");
    side_row(out, "Home teams", &su.home_teams);
    side_row(out, "Away teams", &su.away_teams);
    side_row(out, "Favorites", &su.favorites);
    side_row(out, "Dogs", &su.dogs);
    side_row(out, "Home favorites", &su.home_favorites);
    side_row(out, "Away favorites", &su.away_favorites);
    side_row(out, "Home dogs", &su.home_dogs);
    side_row(out, "Away dogs", &su.away_dogs);
    out.push('\n');
}

fn render_ats(out: &mut String, report: &TrendsReport) {
    let ats = &report.against_the_spread;
    let _ = writeln!(out, "{:<18} {:>6} {:>6} {:>6} {:>6}", "Against the Spread", "W", "L", "P", "Pct");
    ats_row(out, "Home teams", &ats.home_teams);
    ats_row(out, "Away teams", &ats.away_teams);
    ats_row(out, "Favorites", &ats.favorites);
    ats_row(out, "Dogs", &ats.dogs);
    ats_row(out, "Home favorites", &ats.home_favorites);
    ats_row(out, "Away favorites", &ats.away_favorites);
    ats_row(out, "Home dogs", &ats.home_dogs);
    ats_row(out, "Away dogs", &ats.away_dogs);
    out.push('\n');
}

fn render_over_under(out: &mut String, report: &TrendsReport) {
    let ou = &report.over_under;
    let _ = writeln!(out, "{:<18} {:>6} {:>6} {:>6} {:>7} {:>7}", "Over/Under", "O", "U", "P", "Over%", "Under%");
    totals_row(out, "All games", &ou.all_games);
    totals_row(out, "Regulation", &ou.non_overtime_games);
    totals_row(out, "Overtime", &ou.overtime_games);
    out.push('\n');
}

fn render_spread_ranges(out: &mut String, report: &TrendsReport) {
    let ranges = &report.spread_ranges;
    let _ = writeln!(out, "{:<18} {:>6} {:>8} {:>8} {:>6}", "Spread Ranges", "Games", "Fav W", "Dog W", "Fav%");
    bucket_row(out, "Small (0-3)", &ranges.small);
    bucket_row(out, "Medium (3.5-7)", &ranges.medium);
    bucket_row(out, "Large (7.5-14)", &ranges.large);
    bucket_row(out, "Huge (14.5+)", &ranges.huge);
    out.push('\n');
}

fn render_situational(out: &mut String, report: &TrendsReport) {
    let blowouts = &report.situational.blowouts;
    let _ = writeln!(out, "Situational");
    let _ = writeln!(
        out,
        "  Blowouts (21+): {} games, {} over / {} under / {} push",
        blowouts.games, blowouts.overs, blowouts.unders, blowouts.pushes
    );
}

fn side_row(out: &mut String, label: &str, rec: &SideRecord) {
    let _ = writeln!(
        out,
        "  {:<16} {:>6} {:>6} {:>6} {:>5}%",
        label, rec.wins, rec.losses, rec.ties, rec.percentage
    );
}

fn ats_row(out: &mut String, label: &str, rec: &AtsRecord) {
    let _ = writeln!(
        out,
        "  {:<16} {:>6} {:>6} {:>6} {:>5}%",
        label, rec.wins, rec.losses, rec.pushes, rec.percentage
    );
}

fn totals_row(out: &mut String, label: &str, rec: &TotalsRecord) {
    let _ = writeln!(
        out,
        "  {:<16} {:>6} {:>6} {:>6} {:>6}% {:>6}%",
        label, rec.overs, rec.unders, rec.pushes, rec.over_percentage, rec.under_percentage
    );
}

fn bucket_row(out: &mut String, label: &str, rec: &SpreadBucket) {
    let _ = writeln!(
        out,
        "  {:<16} {:>6} {:>8} {:>8} {:>5}%",
        label, rec.games, rec.fav_wins, rec.dog_wins, rec.fav_percentage
    );
}
