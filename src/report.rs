use std::fmt::Write as _;
use std::path::Path;

use crate::aggregate::SeasonSummary;
use crate::error::Result;

/// Render the season summary in its fixed human-readable layout.
pub fn render_summary(summary: &SeasonSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "WPL Data Summary");
    let _ = writeln!(out, "===============");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Matches: {}", summary.total_matches);
    let _ = writeln!(
        out,
        "Season: {}",
        summary.season.as_deref().unwrap_or("unknown")
    );
    let _ = writeln!(
        out,
        "Date Range: {} to {}",
        summary.first_date, summary.last_date
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Teams Performance:");
    let _ = writeln!(out, "------------------");
    for (team, stats) in &summary.teams {
        let _ = writeln!(out, "{team}:");
        let _ = writeln!(out, "- Matches played: {}", stats.matches);
        let _ = writeln!(out, "- Matches won: {}", stats.wins);
        let _ = writeln!(out, "- Matches lost: {}", stats.losses);
        let _ = writeln!(out, "- Win rate: {:.1}%", stats.win_rate());
        let _ = writeln!(out, "- Runs scored: {:.0}", stats.total_runs);
        let _ = writeln!(out, "- Wickets taken: {:.0}", stats.total_wickets);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Venue Statistics:");
    let _ = writeln!(out, "----------------");
    for (venue, stats) in &summary.venues {
        let _ = writeln!(out, "{venue}:");
        let _ = writeln!(out, "- Matches hosted: {}", stats.matches);
        if let Some(avg) = stats.avg_margin_runs {
            let _ = writeln!(out, "- Average winning margin (runs): {avg:.2}");
        }
        if let Some(avg) = stats.avg_margin_wickets {
            let _ = writeln!(out, "- Average winning margin (wickets): {avg:.2}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Toss Impact:");
    let _ = writeln!(out, "-----------");
    let _ = writeln!(
        out,
        "Teams winning both toss and match: {} ({:.1}%)",
        summary.toss.matches_won_after_toss, summary.toss.percentage
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Top Players:");
    let _ = writeln!(out, "-----------");
    let _ = writeln!(out, "Player of the Match awards:");
    for (player, awards) in &summary.top_players {
        let _ = writeln!(out, "- {player}: {awards} awards");
    }

    out
}

/// Persist the report next to the cleaned dataset, tmp-then-rename.
pub fn write_summary(path: &Path, summary: &SeasonSummary) -> Result<()> {
    let rendered = render_summary(summary);
    let tmp = path.with_extension("txt.tmp");
    std::fs::write(&tmp, rendered)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::render_summary;
    use crate::aggregate::SeasonSummary;
    use crate::derive::derive_record;
    use crate::diagnostics::Diagnostics;
    use crate::record::RawMatchRecord;

    fn summary_for(raws: Vec<RawMatchRecord>) -> SeasonSummary {
        let mut diag = Diagnostics::new();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid test date");
        let records: Vec<_> = raws
            .iter()
            .map(|raw| derive_record(raw, date, 1, &mut diag))
            .collect();
        SeasonSummary::compute(&records).expect("summary should compute")
    }

    #[test]
    fn report_contains_the_fixed_section_headers() {
        let summary = summary_for(vec![RawMatchRecord {
            season: Some("WPL 2024".to_string()),
            team1: Some("Mumbai".to_string()),
            team2: Some("Delhi".to_string()),
            winner: Some("Mumbai".to_string()),
            venue: Some("Brabourne".to_string()),
            winner_runs: Some("15".to_string()),
            ..Default::default()
        }]);
        let text = render_summary(&summary);
        for header in [
            "WPL Data Summary",
            "Teams Performance:",
            "Venue Statistics:",
            "Toss Impact:",
            "Top Players:",
        ] {
            assert!(text.contains(header), "missing section header {header:?}");
        }
        assert!(text.contains("Season: WPL 2024"));
        assert!(text.contains("Date Range: 2024-03-01 to 2024-03-01"));
        assert!(text.contains("- Average winning margin (runs): 15.00"));
    }

    #[test]
    fn missing_margin_averages_are_omitted_not_zero() {
        let summary = summary_for(vec![RawMatchRecord {
            team1: Some("Mumbai".to_string()),
            team2: Some("Delhi".to_string()),
            venue: Some("Brabourne".to_string()),
            ..Default::default()
        }]);
        let text = render_summary(&summary);
        assert!(!text.contains("Average winning margin"));
        assert!(text.contains("- Matches hosted: 1"));
    }

    #[test]
    fn missing_season_renders_unknown() {
        let summary = summary_for(vec![RawMatchRecord {
            team1: Some("Mumbai".to_string()),
            team2: Some("Delhi".to_string()),
            ..Default::default()
        }]);
        let text = render_summary(&summary);
        assert!(text.contains("Season: unknown"));
    }
}
