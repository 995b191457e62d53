use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("source file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("malformed source table {}: {source}", .path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unparsable date value {value:?} in row {row}")]
    DateParse { row: usize, value: String },

    #[error("empty input table: nothing to summarize")]
    EmptyTable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    CsvWrite(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;
