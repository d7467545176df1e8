//! Per-player aggregation of tracked plays

use std::collections::HashMap;

use serde::Serialize;

use super::{PlayEntry, ScoringAction, points_for_play};
use crate::export::{ExportRecord, ExportTable};

/// Column headers used when a box score is exported
pub const BOX_SCORE_COLUMNS: [&str; 7] = ["player", "team", "pts", "3pm", "2pm", "ftm", "other"];

/// Totals for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    pub player: String,
    pub team: Option<String>,
    pub points: u32,
    pub three_point_makes: u32,
    pub two_point_makes: u32,
    pub free_throws_made: u32,
    /// Plays that carry no points (misses, rebounds, fouls, unknown actions)
    pub other_plays: u32,
}

impl PlayerLine {
    fn record(&mut self, entry: &PlayEntry) {
        self.points += points_for_play(entry);
        match entry.action {
            ScoringAction::ThreePointMake => self.three_point_makes += 1,
            ScoringAction::TwoPointMake => self.two_point_makes += 1,
            ScoringAction::FreeThrowMade => self.free_throws_made += 1,
            ScoringAction::Other(_) => self.other_plays += 1,
        }
    }

    /// Field goals made (two- and three-pointers)
    pub fn field_goals_made(&self) -> u32 {
        self.three_point_makes + self.two_point_makes
    }
}

/// Player lines in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoxScore {
    lines: Vec<PlayerLine>,
}

impl BoxScore {
    /// Aggregate plays by player and team
    pub fn from_plays<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayEntry>,
    {
        let mut index: HashMap<(String, Option<String>), usize> = HashMap::new();
        let mut lines: Vec<PlayerLine> = Vec::new();

        for entry in entries {
            let key = (entry.player.clone(), entry.team.clone());
            let slot = *index.entry(key).or_insert_with(|| {
                lines.push(PlayerLine {
                    player: entry.player.clone(),
                    team: entry.team.clone(),
                    ..Default::default()
                });
                lines.len() - 1
            });
            lines[slot].record(entry);
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[PlayerLine] {
        &self.lines
    }

    pub fn player(&self, name: &str) -> Option<&PlayerLine> {
        self.lines.iter().find(|l| l.player == name)
    }

    pub fn total_points(&self) -> u32 {
        self.lines.iter().map(|l| l.points).sum()
    }

    /// Points per team, in order of first appearance (plays without a team are skipped)
    pub fn team_points(&self) -> Vec<(&str, u32)> {
        let mut totals: Vec<(&str, u32)> = Vec::new();
        for line in &self.lines {
            let Some(team) = line.team.as_deref() else {
                continue;
            };
            match totals.iter_mut().find(|(t, _)| *t == team) {
                Some((_, points)) => *points += line.points,
                None => totals.push((team, line.points)),
            }
        }
        totals
    }

    /// One record per player, columns as in [`BOX_SCORE_COLUMNS`]
    pub fn to_table(&self) -> ExportTable {
        self.lines
            .iter()
            .map(|line| {
                let [player, team, pts, three, two, ft, other] = BOX_SCORE_COLUMNS;
                ExportRecord::new()
                    .with(player, line.player.as_str())
                    .with(team, line.team.clone().unwrap_or_default())
                    .with(pts, line.points)
                    .with(three, line.three_point_makes)
                    .with(two, line.two_point_makes)
                    .with(ft, line.free_throws_made)
                    .with(other, line.other_plays)
            })
            .collect()
    }
}
