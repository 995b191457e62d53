use std::env;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILE: &str = "Wpl 2023-2024.csv";
pub const CLEAN_FILE: &str = "wpl_clean.csv";
pub const SUMMARY_FILE: &str = "data_summary.txt";

/// Where the pipeline reads and writes. Raw exports live under `raw/`,
/// both output artifacts land under `processed/`.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub input_file: PathBuf,
}

impl DataPaths {
    pub fn with_base(base: &Path) -> Self {
        let raw_dir = base.join("raw");
        let processed_dir = base.join("processed");
        let input_file = raw_dir.join(DEFAULT_INPUT_FILE);
        Self {
            raw_dir,
            processed_dir,
            input_file,
        }
    }

    /// Resolve from the environment: WPL_DATA_DIR overrides the base
    /// directory, WPL_INPUT_FILE overrides the input file outright.
    pub fn from_env() -> Self {
        let base = env::var("WPL_DATA_DIR")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let mut paths = Self::with_base(&base);
        if let Some(input) = env::var("WPL_INPUT_FILE")
            .ok()
            .filter(|val| !val.trim().is_empty())
        {
            paths.input_file = PathBuf::from(input);
        }
        paths
    }

    pub fn clean_file(&self) -> PathBuf {
        self.processed_dir.join(CLEAN_FILE)
    }

    pub fn summary_file(&self) -> PathBuf {
        self.processed_dir.join(SUMMARY_FILE)
    }

    pub fn ensure_processed_dir(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.processed_dir)
    }
}
