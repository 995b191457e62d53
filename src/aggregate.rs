use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{CleanError, Result};
use crate::record::CleanMatchRecord;

pub const TOP_PLAYER_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamAggregate {
    pub matches: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_runs: f64,
    pub total_wickets: f64,
}

impl TeamAggregate {
    pub fn win_rate(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.wins as f64 / self.matches as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueAggregate {
    pub matches: usize,
    // Means over recorded margins only. A venue with no wicket-decided match
    // has no wicket average, not a zero one.
    pub avg_margin_runs: Option<f64>,
    pub avg_margin_wickets: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TossImpact {
    pub matches_won_after_toss: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone)]
pub struct SeasonSummary {
    pub total_matches: usize,
    pub season: Option<String>,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub teams: BTreeMap<String, TeamAggregate>,
    pub venues: BTreeMap<String, VenueAggregate>,
    pub toss: TossImpact,
    pub top_players: Vec<(String, usize)>,
}

impl SeasonSummary {
    pub fn compute(records: &[CleanMatchRecord]) -> Result<Self> {
        let (Some(first_date), Some(last_date)) = (
            records.iter().map(|r| r.date).min(),
            records.iter().map(|r| r.date).max(),
        ) else {
            return Err(CleanError::EmptyTable);
        };

        let matches_won_after_toss = records.iter().filter(|r| r.won_toss_and_match).count();
        let toss = TossImpact {
            matches_won_after_toss,
            percentage: matches_won_after_toss as f64 / records.len() as f64 * 100.0,
        };

        Ok(Self {
            total_matches: records.len(),
            season: records.iter().find_map(|r| r.season.clone()),
            first_date,
            last_date,
            teams: team_aggregates(records),
            venues: venue_aggregates(records),
            toss,
            top_players: top_players(records, TOP_PLAYER_LIMIT),
        })
    }
}

pub fn team_aggregates(records: &[CleanMatchRecord]) -> BTreeMap<String, TeamAggregate> {
    let mut teams: BTreeMap<String, TeamAggregate> = BTreeMap::new();
    for record in records {
        let winner = record.winner.as_deref();
        if let Some(team1) = record.team1.as_deref() {
            let entry = teams.entry(team1.to_string()).or_default();
            entry.matches += 1;
            if let Some(score) = record.team1_score {
                entry.total_runs += score;
            }
            // Wickets taken are the opponent's wickets lost.
            if let Some(wickets) = record.team2_wickets {
                entry.total_wickets += wickets;
            }
            if winner == Some(team1) {
                entry.wins += 1;
            } else if winner.is_some() && winner == record.team2.as_deref() {
                entry.losses += 1;
            }
        }
        if let Some(team2) = record.team2.as_deref() {
            let entry = teams.entry(team2.to_string()).or_default();
            entry.matches += 1;
            if let Some(score) = record.team2_score {
                entry.total_runs += score;
            }
            if let Some(wickets) = record.team1_wickets {
                entry.total_wickets += wickets;
            }
            if winner == Some(team2) {
                entry.wins += 1;
            } else if winner.is_some() && winner == record.team1.as_deref() {
                entry.losses += 1;
            }
        }
    }
    teams
}

pub fn venue_aggregates(records: &[CleanMatchRecord]) -> BTreeMap<String, VenueAggregate> {
    #[derive(Default)]
    struct Acc {
        matches: usize,
        runs_sum: f64,
        runs_n: usize,
        wickets_sum: f64,
        wickets_n: usize,
    }

    let mut accs: BTreeMap<String, Acc> = BTreeMap::new();
    for record in records {
        let Some(venue) = record.venue.as_deref() else {
            continue;
        };
        let acc = accs.entry(venue.to_string()).or_default();
        acc.matches += 1;
        if let Some(runs) = record.winner_runs {
            acc.runs_sum += runs;
            acc.runs_n += 1;
        }
        if let Some(wickets) = record.winner_wickets {
            acc.wickets_sum += wickets;
            acc.wickets_n += 1;
        }
    }

    accs.into_iter()
        .map(|(venue, acc)| {
            let aggregate = VenueAggregate {
                matches: acc.matches,
                avg_margin_runs: (acc.runs_n > 0).then(|| acc.runs_sum / acc.runs_n as f64),
                avg_margin_wickets: (acc.wickets_n > 0)
                    .then(|| acc.wickets_sum / acc.wickets_n as f64),
            };
            (venue, aggregate)
        })
        .collect()
}

/// Award counts for player_of_match, most decorated first. Ties keep
/// first-encountered order (stable sort over an insertion-ordered list).
pub fn top_players(records: &[CleanMatchRecord], limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let Some(player) = record.player_of_match.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|(name, _)| name == player) {
            Some(entry) => entry.1 += 1,
            None => counts.push((player.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Whole-season figures over the innings scores, in the shape the match
/// analysis view expects.
#[derive(Debug, Clone)]
pub struct MatchAnalysis {
    pub total_matches: usize,
    pub average_first_innings_score: Option<f64>,
    pub average_second_innings_score: Option<f64>,
    pub highest_score: Option<f64>,
    pub venues: Vec<String>,
    pub players_of_match: Vec<String>,
}

impl MatchAnalysis {
    pub fn compute(records: &[CleanMatchRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(CleanError::EmptyTable);
        }
        let highest_score = records
            .iter()
            .flat_map(|r| [r.team1_score, r.team2_score])
            .flatten()
            .fold(None, |acc: Option<f64>, score| {
                Some(acc.map_or(score, |best| best.max(score)))
            });

        Ok(Self {
            total_matches: records.len(),
            average_first_innings_score: mean(records.iter().filter_map(|r| r.team1_score)),
            average_second_innings_score: mean(records.iter().filter_map(|r| r.team2_score)),
            highest_score,
            venues: distinct(records.iter().filter_map(|r| r.venue.as_deref())),
            players_of_match: distinct(records.iter().filter_map(|r| r.player_of_match.as_deref())),
        })
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for value in values {
        sum += value;
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out.sort();
    out
}
