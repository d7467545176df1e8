//! Points command implementation.

use anyhow::Result;
use statline::{ScoringAction, points_for_action};

/// Print the point value of each action
pub fn run(actions: &[String]) -> Result<()> {
    for raw in actions {
        let action = ScoringAction::parse_lossy(raw);
        println!("{}\t{}", action, points_for_action(&action));
    }
    Ok(())
}
