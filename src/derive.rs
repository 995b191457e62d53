use chrono::NaiveDate;

use crate::diagnostics::Diagnostics;
use crate::record::{CleanMatchRecord, RawMatchRecord, WinType};

pub const NO_RESULT: &str = "No result";

/// Coerce a free-text cell to a number. Missing or blank cells are absent
/// without comment; a non-numeric value is absent plus a coercion warning.
/// Absent is `None`, never zero.
pub fn coerce_numeric(
    raw: Option<&str>,
    row: usize,
    field: &'static str,
    diag: &mut Diagnostics,
) -> Option<f64> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(number) => Some(number),
        Err(_) => {
            diag.warn_coercion(row, field, value);
            None
        }
    }
}

/// First run of digits anywhere in the text. Source match-number cells embed
/// descriptive text around the numeral ("Match 7 (N/A)").
pub fn leading_number(raw: &str) -> Option<u32> {
    raw.split(|ch: char| !ch.is_ascii_digit())
        .filter(|chunk| !chunk.is_empty())
        .filter_map(|chunk| chunk.parse::<u32>().ok())
        .next()
}

/// Derive one cleaned record. Text fields are assumed already trimmed by the
/// normalization stage; `row` is the 1-based data row for warnings.
pub fn derive_record(
    raw: &RawMatchRecord,
    date: NaiveDate,
    row: usize,
    diag: &mut Diagnostics,
) -> CleanMatchRecord {
    let winner_runs = coerce_numeric(raw.winner_runs.as_deref(), row, "winner_runs", diag);
    let winner_wickets = coerce_numeric(raw.winner_wickets.as_deref(), row, "winner_wickets", diag);
    let team1_score = coerce_numeric(raw.team1_score.as_deref(), row, "team1_score", diag);
    let team1_wickets = coerce_numeric(raw.team1_wickets.as_deref(), row, "team1_wickets", diag);
    let team1_overs = coerce_numeric(raw.team1_overs.as_deref(), row, "team1_overs", diag);
    let team2_score = coerce_numeric(raw.team2_score.as_deref(), row, "team2_score", diag);
    let team2_wickets = coerce_numeric(raw.team2_wickets.as_deref(), row, "team2_wickets", diag);
    let team2_overs = coerce_numeric(raw.team2_overs.as_deref(), row, "team2_overs", diag);

    let match_number = raw.match_number.as_deref().and_then(leading_number);

    // Presence, not truthiness: a zero-run margin still decides by runs, and
    // a malformed row with both margins resolves to runs, first match wins.
    let win_type = if winner_runs.is_some() {
        WinType::Runs
    } else if winner_wickets.is_some() {
        WinType::Wickets
    } else {
        WinType::Unknown
    };
    let margin = match win_type {
        WinType::Runs => winner_runs,
        WinType::Wickets => winner_wickets,
        WinType::Unknown => None,
    };

    let is_home_win = match (&raw.winner, &raw.team1) {
        (Some(winner), Some(team1)) => winner == team1,
        _ => false,
    };
    let won_toss_and_match = match (&raw.winner, &raw.toss_winner) {
        (Some(winner), Some(toss_winner)) => winner == toss_winner,
        _ => false,
    };

    let match_result = match margin {
        Some(value) => format!(
            "{} won by {} {}",
            raw.winner.as_deref().unwrap_or_default(),
            value as i64,
            win_type
        ),
        None => NO_RESULT.to_string(),
    };

    CleanMatchRecord {
        match_number,
        season: raw.season.clone(),
        date,
        venue: raw.venue.clone(),
        city: raw.city.clone(),
        team1: raw.team1.clone(),
        team2: raw.team2.clone(),
        toss_winner: raw.toss_winner.clone(),
        winner: raw.winner.clone(),
        player_of_match: raw.player_of_match.clone(),
        winner_runs,
        winner_wickets,
        team1_score,
        team1_wickets,
        team1_overs,
        team2_score,
        team2_wickets,
        team2_overs,
        win_type,
        margin,
        is_home_win,
        won_toss_and_match,
        match_result,
    }
}
