//! Box score command: aggregate plays and export the result.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use statline::{BoxScore, ExportConfig, PlayEntry};
use tracing::info;

/// Default export name, e.g. `box-score-20260115-193000.xlsx`
pub fn default_file_name() -> String {
    format!("box-score-{}.xlsx", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Render a box score as TSV (the exported columns plus team totals) or JSON
pub fn format_box_score(score: &BoxScore, json: bool) -> Result<String> {
    if json {
        let mut output = serde_json::to_string_pretty(score)?;
        output.push('\n');
        return Ok(output);
    }

    let mut output = super::inspect::format_tsv(&score.to_table());
    for (team, points) in score.team_points() {
        output.push_str(&format!("{}: {}\n", team, points));
    }
    Ok(output)
}

pub fn run(
    config: &ExportConfig,
    plays_path: &Path,
    name: Option<&str>,
    no_share: bool,
    json: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(plays_path)
        .with_context(|| format!("Failed to read plays from {}", plays_path.display()))?;
    let plays: Vec<PlayEntry> =
        serde_json::from_str(&content).context("Failed to parse plays JSON")?;
    info!("Loaded {} plays", plays.len());

    let score = BoxScore::from_plays(&plays);
    print!("{}", format_box_score(&score, json)?);

    let file_name = name.map(str::to_string).unwrap_or_else(default_file_name);
    let artifact = super::write_or_share(config, &score.to_table(), &file_name, no_share)?;
    eprintln!("Exported to: {}", artifact.path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use statline::{BOX_SCORE_COLUMNS, ScoringAction};

    #[test]
    fn test_default_file_name_shape() {
        let name = default_file_name();
        assert!(name.starts_with("box-score-"));
        assert!(name.ends_with(".xlsx"));
        assert_eq!(name.len(), "box-score-20260115-193000.xlsx".len());
    }

    fn sample_score() -> BoxScore {
        BoxScore::from_plays(&[
            PlayEntry::new("John", ScoringAction::ThreePointMake).with_team("Seattle"),
            PlayEntry::new("John", ScoringAction::parse_lossy("rebound")).with_team("Seattle"),
            PlayEntry::new("Mike", ScoringAction::FreeThrowMade),
        ])
    }

    #[test]
    fn test_tsv_output_matches_exported_columns() {
        let output = format_box_score(&sample_score(), false).unwrap();
        let mut lines = output.lines();

        assert_eq!(lines.next(), Some(BOX_SCORE_COLUMNS.join("\t").as_str()));
        assert_eq!(lines.next(), Some("John\tSeattle\t3\t1\t0\t0\t1"));
        assert_eq!(lines.next(), Some("Mike\t\t1\t0\t0\t1\t0"));
        assert_eq!(lines.next(), Some("Seattle: 3"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_output() {
        let output = format_box_score(&sample_score(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let lines = value["lines"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["player"], "John");
        assert_eq!(lines[0]["points"], 3);
        assert_eq!(lines[0]["other_plays"], 1);
        assert!(lines[1]["team"].is_null());
    }

    #[test]
    fn test_run_writes_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let plays_path = dir.path().join("plays.json");
        std::fs::write(
            &plays_path,
            r#"[
                {"action": "3pt", "player": "John", "team": "Seattle"},
                {"action": "ft", "player": "John", "team": "Seattle"},
                {"action": "two_point_make", "player": "Mike", "team": "Los Angeles"}
            ]"#,
        )
        .unwrap();

        let config = ExportConfig::builder()
            .cache_dir(dir.path().join("cache"))
            .build();
        run(&config, &plays_path, Some("game.xlsx"), true, false).unwrap();

        let bytes = std::fs::read(dir.path().join("cache").join("game.xlsx")).unwrap();
        let table = statline::read_workbook(&bytes).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.records()[0].get("pts"),
            Some(&statline::CellValue::Number(4.0))
        );
    }
}
