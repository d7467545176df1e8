mod action;
mod box_score;
mod play;
mod rules;

pub use action::*;
pub use box_score::*;
pub use play::*;
pub use rules::*;
