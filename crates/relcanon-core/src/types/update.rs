use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Part-added signal of an update annotation.
///
/// Serializes as `false`, `true`, or the part number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartAdded {
    /// No part-added signal.
    #[default]
    No,
    /// A signal without a single number: "Part 1 & 2 Added", "Part Added".
    Unspecified,
    /// A specific part: "Part 2 Added".
    Part(u32),
}

impl PartAdded {
    /// Returns `true` for any part-added signal.
    #[must_use]
    pub fn is_set(self) -> bool {
        !matches!(self, Self::No)
    }
}

impl Serialize for PartAdded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::No => serializer.serialize_bool(false),
            Self::Unspecified => serializer.serialize_bool(true),
            Self::Part(part) => serializer.serialize_u32(*part),
        }
    }
}

impl<'de> Deserialize<'de> for PartAdded {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Part(u32),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Self::No,
            Repr::Flag(true) => Self::Unspecified,
            Repr::Part(part) => Self::Part(part),
        })
    }
}

/// Incremental-release annotations ("[Ep 08 Added]", "Complete").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Episode number marked as newly added.
    pub episode_added: Option<u32>,

    /// Volume number marked as newly added.
    pub volume_added: Option<u32>,

    /// Part-added signal.
    pub part_added: PartAdded,

    /// `Some(true)` when the title says "complete" or "all episodes".
    /// Absence is `None`, never `Some(false)`.
    pub complete: Option<bool>,
}

impl UpdateInfo {
    /// Returns `true` when no annotation was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.episode_added.is_none()
            && self.volume_added.is_none()
            && !self.part_added.is_set()
            && self.complete.is_none()
    }
}
