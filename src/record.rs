use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the raw season export. Everything is optional text: the source
/// is an untrusted spreadsheet export with no guaranteed schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMatchRecord {
    pub match_number: Option<String>,
    pub season: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub toss_winner: Option<String>,
    pub winner: Option<String>,
    pub winner_runs: Option<String>,
    pub winner_wickets: Option<String>,
    pub player_of_match: Option<String>,
    pub team1_score: Option<String>,
    pub team1_wickets: Option<String>,
    pub team1_overs: Option<String>,
    pub team2_score: Option<String>,
    pub team2_wickets: Option<String>,
    pub team2_overs: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinType {
    Runs,
    Wickets,
    Unknown,
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WinType::Runs => "runs",
            WinType::Wickets => "wickets",
            WinType::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// One cleaned match. Field order is the column order of the persisted CSV.
/// Absent numerics stay `None`; zero and "not recorded" are distinct values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanMatchRecord {
    pub match_number: Option<u32>,
    pub season: Option<String>,
    pub date: NaiveDate,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub toss_winner: Option<String>,
    pub winner: Option<String>,
    pub player_of_match: Option<String>,
    pub winner_runs: Option<f64>,
    pub winner_wickets: Option<f64>,
    pub team1_score: Option<f64>,
    pub team1_wickets: Option<f64>,
    pub team1_overs: Option<f64>,
    pub team2_score: Option<f64>,
    pub team2_wickets: Option<f64>,
    pub team2_overs: Option<f64>,
    pub win_type: WinType,
    pub margin: Option<f64>,
    pub is_home_win: bool,
    pub won_toss_and_match: bool,
    pub match_result: String,
}

impl CleanMatchRecord {
    /// Whether `team` played in this match, in either slot.
    pub fn involves(&self, team: &str) -> bool {
        self.team1.as_deref() == Some(team) || self.team2.as_deref() == Some(team)
    }
}
