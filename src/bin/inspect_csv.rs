use std::path::PathBuf;

use anyhow::Result;

use wpl_analytics::config::DataPaths;
use wpl_analytics::table;

// Eyeball a raw season export before running the pipeline on it: normalized
// column names, row count, and the first few rows.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let input = parse_input_arg().unwrap_or_else(|| DataPaths::from_env().input_file);
    let table = table::read_raw_table(&input)?;

    println!("Raw export: {}", input.display());
    println!();
    println!("Columns:");
    println!("========");
    for column in &table.headers {
        println!("- {column}");
    }

    println!();
    println!("Rows: {}", table.records.len());
    println!();
    println!("First rows:");
    println!("===========");
    for (idx, record) in table.records.iter().take(5).enumerate() {
        println!(
            "{:>3}  {}  {} vs {}  winner: {}  venue: {}",
            idx + 1,
            record.date.as_deref().unwrap_or("-"),
            record.team1.as_deref().unwrap_or("-"),
            record.team2.as_deref().unwrap_or("-"),
            record.winner.as_deref().unwrap_or("-"),
            record.venue.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

fn parse_input_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--input=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--input" {
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
