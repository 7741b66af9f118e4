use std::fmt;

use serde::{Deserialize, Serialize};

/// Season specification found in a release title.
///
/// Serializes untagged: a single season is a bare number, a range is the
/// expanded inclusive list (`"Season 1-3"` → `[1, 2, 3]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeasonSpec {
    /// Single season: "Season 4", "S04"
    Single(u32),

    /// Inclusive, strictly ascending season list: "Season 1-5", "S01-03"
    Range(Vec<u32>),
}

impl SeasonSpec {
    /// Expands `start..=end` into a range spec.
    ///
    /// A reversed range (`end < start`) expands to an empty list. Returns
    /// `None` when the range holds more than `max_span` seasons.
    #[must_use]
    pub fn range(start: u32, end: u32, max_span: u32) -> Option<Self> {
        if end < start {
            return Some(Self::Range(Vec::new()));
        }
        if end - start >= max_span {
            return None;
        }
        Some(Self::Range((start..=end).collect()))
    }

    /// All seasons covered, in ascending order.
    #[must_use]
    pub fn seasons(&self) -> &[u32] {
        match self {
            Self::Single(season) => std::slice::from_ref(season),
            Self::Range(seasons) => seasons,
        }
    }
}

impl fmt::Display for SeasonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(season) => write!(f, "S{season:02}"),
            Self::Range(seasons) => match (seasons.first(), seasons.last()) {
                (Some(first), Some(last)) => write!(f, "S{first:02}-S{last:02}"),
                _ => Ok(()),
            },
        }
    }
}
