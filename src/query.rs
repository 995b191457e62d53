use std::path::Path;

use chrono::NaiveDate;

use crate::error::{CleanError, Result};
use crate::record::{CleanMatchRecord, WinType};

/// Load a previously cleaned dataset back from disk, the way the dashboard
/// consumes it.
pub fn read_clean_table(path: &Path) -> Result<Vec<CleanMatchRecord>> {
    if !path.exists() {
        return Err(CleanError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let malformed = |source| CleanError::MalformedSource {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(malformed)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<CleanMatchRecord>() {
        records.push(row.map_err(malformed)?);
    }
    Ok(records)
}

/// Inclusive on both ends, matching the dashboard's date pickers.
pub fn filter_by_date_range(
    records: &[CleanMatchRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CleanMatchRecord> {
    records
        .iter()
        .filter(|record| record.date >= start && record.date <= end)
        .cloned()
        .collect()
}

pub fn filter_by_team(records: &[CleanMatchRecord], team: &str) -> Vec<CleanMatchRecord> {
    records
        .iter()
        .filter(|record| record.involves(team))
        .cloned()
        .collect()
}

/// Headline numbers for a filtered view of the season.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetrics {
    pub total_matches: usize,
    pub wins_by_runs: usize,
    pub wins_by_wickets: usize,
    pub toss_win_percentage: f64,
}

impl KeyMetrics {
    pub fn compute(records: &[CleanMatchRecord]) -> Self {
        let total_matches = records.len();
        let toss_wins = records.iter().filter(|r| r.won_toss_and_match).count();
        let toss_win_percentage = if total_matches == 0 {
            0.0
        } else {
            toss_wins as f64 / total_matches as f64 * 100.0
        };
        Self {
            total_matches,
            wins_by_runs: records
                .iter()
                .filter(|r| r.win_type == WinType::Runs)
                .count(),
            wins_by_wickets: records
                .iter()
                .filter(|r| r.win_type == WinType::Wickets)
                .count(),
            toss_win_percentage,
        }
    }
}
