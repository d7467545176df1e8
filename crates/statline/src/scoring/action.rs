use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Classification of a single basketball play relevant to its point value.
///
/// Parsing is total: identifiers that match none of the scoring makes land in
/// [`ScoringAction::Other`] with the original text preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum ScoringAction {
    #[strum(serialize = "three_point_make", serialize = "3pt", serialize = "3pm")]
    ThreePointMake,
    #[strum(serialize = "two_point_make", serialize = "2pt", serialize = "2pm")]
    TwoPointMake,
    #[strum(serialize = "free_throw_made", serialize = "ft", serialize = "ftm")]
    FreeThrowMade,
    #[strum(default)]
    Other(String),
}

impl ScoringAction {
    /// Canonical identifier (the raw text for `Other`)
    pub fn as_str(&self) -> &str {
        match self {
            Self::ThreePointMake => "three_point_make",
            Self::TwoPointMake => "two_point_make",
            Self::FreeThrowMade => "free_throw_made",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_scoring(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Parse an identifier, falling back to `Other` for anything unknown
    pub fn parse_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| Self::Other(raw.to_string()))
    }
}

impl From<String> for ScoringAction {
    fn from(raw: String) -> Self {
        Self::parse_lossy(&raw)
    }
}

impl From<ScoringAction> for String {
    fn from(action: ScoringAction) -> Self {
        match action {
            ScoringAction::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ScoringAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
