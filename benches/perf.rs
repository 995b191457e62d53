use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};

use wpl_analytics::aggregate::SeasonSummary;
use wpl_analytics::derive::derive_record;
use wpl_analytics::diagnostics::Diagnostics;
use wpl_analytics::record::{CleanMatchRecord, RawMatchRecord};

const TEAMS: &[&str] = &["Mumbai", "Delhi", "Bangalore", "Gujarat", "Lucknow"];
const VENUES: &[&str] = &["Brabourne Stadium", "Chinnaswamy Stadium", "Eden Gardens"];

fn sample_raw(idx: usize) -> RawMatchRecord {
    let team1 = TEAMS[idx % TEAMS.len()];
    let team2 = TEAMS[(idx + 1) % TEAMS.len()];
    let by_runs = idx % 3 != 0;
    RawMatchRecord {
        match_number: Some(format!("Match {}", idx + 1)),
        season: Some("WPL 2023-24".to_string()),
        date: Some("2024-02-23".to_string()),
        venue: Some(VENUES[idx % VENUES.len()].to_string()),
        city: Some("Mumbai".to_string()),
        team1: Some(team1.to_string()),
        team2: Some(team2.to_string()),
        toss_winner: Some(team2.to_string()),
        winner: Some(team1.to_string()),
        winner_runs: by_runs.then(|| ((idx % 40) + 1).to_string()),
        winner_wickets: (!by_runs).then(|| ((idx % 9) + 1).to_string()),
        player_of_match: Some(format!("Player {}", idx % 12)),
        team1_score: Some((140 + idx % 60).to_string()),
        team1_wickets: Some((idx % 10).to_string()),
        team1_overs: Some("20".to_string()),
        team2_score: Some((130 + idx % 55).to_string()),
        team2_wickets: Some((idx % 10).to_string()),
        team2_overs: Some("19.4".to_string()),
    }
}

fn sample_records(n: usize) -> Vec<CleanMatchRecord> {
    let date = NaiveDate::from_ymd_opt(2024, 2, 23).expect("valid bench date");
    let mut diag = Diagnostics::new();
    (0..n)
        .map(|idx| derive_record(&sample_raw(idx), date, idx + 1, &mut diag))
        .collect()
}

fn bench_derivation_pass(c: &mut Criterion) {
    let raws: Vec<RawMatchRecord> = (0..200).map(sample_raw).collect();
    let date = NaiveDate::from_ymd_opt(2024, 2, 23).expect("valid bench date");

    c.bench_function("derivation_pass_200_rows", |b| {
        b.iter(|| {
            let mut diag = Diagnostics::new();
            let records: Vec<_> = raws
                .iter()
                .enumerate()
                .map(|(idx, raw)| derive_record(black_box(raw), date, idx + 1, &mut diag))
                .collect();
            black_box(records.len());
        })
    });
}

fn bench_season_summary(c: &mut Criterion) {
    let records = sample_records(200);

    c.bench_function("season_summary_200_rows", |b| {
        b.iter(|| {
            let summary = SeasonSummary::compute(black_box(&records)).unwrap();
            black_box(summary.teams.len());
        })
    });
}

criterion_group!(perf, bench_derivation_pass, bench_season_summary);
criterion_main!(perf);
