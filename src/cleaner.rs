use std::path::PathBuf;

use tracing::info;

use crate::aggregate::SeasonSummary;
use crate::config::DataPaths;
use crate::dates;
use crate::derive::derive_record;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::record::{CleanMatchRecord, RawMatchRecord};
use crate::report;
use crate::table;

#[derive(Debug)]
pub struct CleanRun {
    pub records: Vec<CleanMatchRecord>,
    pub clean_path: PathBuf,
    pub summary_path: PathBuf,
}

/// Trim the identifier fields used for grouping and joining. Trailing spaces
/// in exports silently break equality-based grouping ("Mumbai " != "Mumbai").
/// Fields absent from the source are skipped.
pub fn normalize_text(records: &mut [RawMatchRecord]) {
    for record in records {
        for field in [
            &mut record.team1,
            &mut record.team2,
            &mut record.winner,
            &mut record.toss_winner,
            &mut record.venue,
            &mut record.city,
        ] {
            if let Some(value) = field {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    *value = trimmed.to_string();
                }
            }
        }
    }
}

/// Run the whole pipeline: load, normalize dates, trim text, derive fields,
/// persist the cleaned dataset, then build and persist the summary report.
///
/// The two artifacts are written in sequence and are independent: a summary
/// failure (e.g. an empty table) surfaces as this function's error, but the
/// cleaned dataset already written is not rolled back.
pub fn clean_data(paths: &DataPaths, diag: &mut Diagnostics) -> Result<CleanRun> {
    info!(input = %paths.input_file.display(), "starting data cleaning run");
    let table = table::read_raw_table(&paths.input_file)?;
    info!(rows = table.records.len(), "raw table read");

    let mut raws = table.records;
    let dates = dates::normalize_dates(&raws)?;
    normalize_text(&mut raws);

    let records: Vec<CleanMatchRecord> = raws
        .iter()
        .zip(dates)
        .enumerate()
        .map(|(idx, (raw, date))| derive_record(raw, date, idx + 1, diag))
        .collect();

    paths.ensure_processed_dir()?;
    let clean_path = paths.clean_file();
    table::write_clean_table(&clean_path, &records)?;
    info!(path = %clean_path.display(), "cleaned dataset written");

    let summary_path = paths.summary_file();
    let summary = SeasonSummary::compute(&records)?;
    report::write_summary(&summary_path, &summary)?;
    info!(path = %summary_path.display(), "summary report written");

    Ok(CleanRun {
        records,
        clean_path,
        summary_path,
    })
}
