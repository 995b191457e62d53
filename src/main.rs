use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use wpl_analytics::aggregate::MatchAnalysis;
use wpl_analytics::cleaner;
use wpl_analytics::config::DataPaths;
use wpl_analytics::diagnostics::Diagnostics;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut paths = match parse_path_arg("--data-dir") {
        Some(base) => DataPaths::with_base(&base),
        None => DataPaths::from_env(),
    };
    if let Some(input) = parse_path_arg("--input") {
        paths.input_file = input;
    }

    let mut diag = Diagnostics::new();
    let run = cleaner::clean_data(&paths, &mut diag).context("data cleaning run failed")?;

    println!("Data cleaning complete");
    println!("Cleaned dataset: {}", run.clean_path.display());
    println!("Summary report: {}", run.summary_path.display());
    println!("Rows cleaned: {}", run.records.len());
    if !diag.is_clean() {
        let warnings = diag.coercion_warnings();
        println!("Coercion warnings: {}", warnings.len());
        for warning in warnings.iter().take(6) {
            println!(
                "  - row {} {}: {:?}",
                warning.row, warning.field, warning.value
            );
        }
    }

    let analysis = MatchAnalysis::compute(&run.records)?;
    println!();
    println!("Match analysis");
    println!("Matches: {}", analysis.total_matches);
    println!(
        "Average first innings score: {}",
        fmt_opt(analysis.average_first_innings_score)
    );
    println!(
        "Average second innings score: {}",
        fmt_opt(analysis.average_second_innings_score)
    );
    println!("Highest score: {}", fmt_opt(analysis.highest_score));
    println!("Venues: {}", analysis.venues.join(", "));

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    }
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}
