//! Point values for scoring actions

use super::{PlayEntry, ScoringAction};

/// Points awarded for an action. Non-scoring and unrecognized actions are worth zero.
pub fn points_for_action(action: &ScoringAction) -> u32 {
    match action {
        ScoringAction::ThreePointMake => 3,
        ScoringAction::TwoPointMake => 2,
        ScoringAction::FreeThrowMade => 1,
        ScoringAction::Other(_) => 0,
    }
}

/// Points awarded for a play; only the action is considered
pub fn points_for_play(entry: &PlayEntry) -> u32 {
    points_for_action(&entry.action)
}

/// Sum of points over a sequence of plays
pub fn total_points<'a, I>(entries: I) -> u32
where
    I: IntoIterator<Item = &'a PlayEntry>,
{
    entries.into_iter().map(points_for_play).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_action() {
        assert_eq!(points_for_action(&ScoringAction::ThreePointMake), 3);
        assert_eq!(points_for_action(&ScoringAction::TwoPointMake), 2);
        assert_eq!(points_for_action(&ScoringAction::FreeThrowMade), 1);
        assert_eq!(points_for_action(&ScoringAction::Other("turnover".into())), 0);
    }

    #[test]
    fn test_unrecognized_identifiers_score_zero() {
        for raw in ["", "block", "free_throw_missed", "three_point_miss", "???"] {
            assert_eq!(points_for_action(&ScoringAction::parse_lossy(raw)), 0, "{raw}");
        }
    }

    #[test]
    fn test_points_for_play_ignores_context() {
        let plain = PlayEntry::new("John", ScoringAction::ThreePointMake);
        let tagged = PlayEntry::new("Mike", ScoringAction::ThreePointMake)
            .with_team("Seattle")
            .with_period(4);

        assert_eq!(points_for_play(&plain), points_for_action(&plain.action));
        assert_eq!(points_for_play(&tagged), points_for_play(&plain));
    }

    #[test]
    fn test_total_points() {
        let plays = vec![
            PlayEntry::new("John", ScoringAction::ThreePointMake),
            PlayEntry::new("John", ScoringAction::FreeThrowMade),
            PlayEntry::new("Mike", ScoringAction::TwoPointMake),
            PlayEntry::new("Mike", ScoringAction::Other("foul".into())),
        ];
        assert_eq!(total_points(&plays), 6);
        assert_eq!(total_points(&Vec::<PlayEntry>::new()), 0);
    }
}
