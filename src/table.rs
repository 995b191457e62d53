use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::{CleanError, Result};
use crate::record::{CleanMatchRecord, RawMatchRecord};

/// The raw export, loaded whole. Small enough for that: one season is tens to
/// low hundreds of rows.
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<RawMatchRecord>,
}

pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(CleanError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    read_table(file).map_err(|source| CleanError::MalformedSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Column labels are lowercased and trimmed before deserialization, so header
/// variance like `" Team1 "` or `DATE` cannot break field lookups.
pub(crate) fn read_table<R: Read>(reader: R) -> std::result::Result<RawTable, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let normalized: StringRecord = rdr
        .headers()?
        .iter()
        .map(|label| label.trim().to_lowercase())
        .collect();
    rdr.set_headers(normalized.clone());

    let mut records = Vec::new();
    for row in rdr.deserialize::<RawMatchRecord>() {
        records.push(row?);
    }
    Ok(RawTable {
        headers: normalized.iter().map(str::to_string).collect(),
        records,
    })
}

/// Persist the cleaned dataset. Written to a temp file and swapped in, so a
/// failed run never leaves a truncated artifact behind.
pub fn write_clean_table(path: &Path, records: &[CleanMatchRecord]) -> Result<()> {
    let tmp = path.with_extension("csv.tmp");
    let mut writer = csv::Writer::from_path(&tmp)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
