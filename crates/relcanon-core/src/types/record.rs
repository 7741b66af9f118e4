use serde::{Deserialize, Serialize};

use super::content::{ContentType, Year};
use super::season::SeasonSpec;
use super::update::UpdateInfo;

/// The structured record produced for one release title.
///
/// Built once per `parse` call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTitleRecord {
    /// Human-readable title with trailing metadata and separators stripped.
    /// May be empty when the title starts with a metadata marker.
    pub display_title: String,

    /// Lowercase, alphanumeric-only key derived from `display_title`.
    pub machine_title: String,

    /// `machine_title|year|type`, the release-group identity.
    pub canonical_key: String,

    /// Movie or series.
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Release year or the `unknown` sentinel.
    pub year: Year,

    /// Season number or inclusive season list.
    pub season: Option<SeasonSpec>,

    /// Part number ("Part 2").
    pub part: Option<u32>,

    /// Volume number ("Vol. 1").
    pub volume: Option<u32>,

    /// Episode number ("Ep 08").
    pub episode: Option<u32>,

    /// Incremental update annotations.
    pub update_info: UpdateInfo,

    /// Audio languages, in vocabulary order.
    pub languages: Vec<String>,

    /// Quality tags, in vocabulary order.
    pub qualities: Vec<String>,

    /// Source platform display name, or `"Unknown"`.
    pub platform: String,

    /// Completeness score in `[0.0, 1.0]`.
    pub confidence: f32,
}

impl ParsedTitleRecord {
    /// Platform value used when no platform keyword is present.
    pub const UNKNOWN_PLATFORM: &'static str = "Unknown";

    /// Builds the canonical key for the given components.
    #[must_use]
    pub fn canonical_key_for(machine_title: &str, year: Year, content_type: ContentType) -> String {
        format!("{machine_title}|{year}|{content_type}")
    }

    /// Returns `true` if the release was classified as a series.
    #[must_use]
    pub fn is_series(&self) -> bool {
        self.content_type == ContentType::Series
    }

    /// Returns `true` if any update annotation was found.
    #[must_use]
    pub fn has_update(&self) -> bool {
        !self.update_info.is_empty()
    }
}

impl std::fmt::Display for ParsedTitleRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedTitleRecord(title={:?}", self.display_title)?;
        write!(f, ", type={}, year={}", self.content_type, self.year)?;
        if let Some(ref season) = self.season {
            write!(f, ", season={season}")?;
        }
        if let Some(episode) = self.episode {
            write!(f, ", ep={episode:02}")?;
        }
        write!(f, ", platform={}", self.platform)?;
        write!(f, ", conf={:.2}", self.confidence)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedTitleRecord {
        ParsedTitleRecord {
            display_title: "Panchayat".into(),
            machine_title: "panchayat".into(),
            canonical_key: "panchayat|2025|series".into(),
            content_type: ContentType::Series,
            year: Year::Known(2025),
            season: Some(SeasonSpec::Single(4)),
            part: None,
            volume: None,
            episode: None,
            update_info: UpdateInfo {
                complete: Some(true),
                ..UpdateInfo::default()
            },
            languages: vec!["Hindi".into()],
            qualities: vec!["480p".into(), "WEB-DL".into()],
            platform: "Amazon".into(),
            confidence: 1.0,
        }
    }

    #[test]
    fn canonical_key_format() {
        assert_eq!(
            ParsedTitleRecord::canonical_key_for("panchayat", Year::Known(2025), ContentType::Series),
            "panchayat|2025|series"
        );
        assert_eq!(
            ParsedTitleRecord::canonical_key_for("", Year::Unknown, ContentType::Movie),
            "|unknown|movie"
        );
    }

    #[test]
    fn helpers() {
        let record = sample();
        assert!(record.is_series());
        assert!(record.has_update());
    }

    #[test]
    fn display_summary() {
        let display = sample().to_string();
        assert!(display.contains("Panchayat"));
        assert!(display.contains("season=S04"));
        assert!(display.contains("conf=1.00"));
    }

    #[test]
    fn json_uses_type_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "series");
        assert_eq!(json["year"], 2025);
        assert_eq!(json["season"], 4);
        assert_eq!(json["update_info"]["part_added"], false);
        assert_eq!(json["update_info"]["complete"], true);
        assert!(json.get("content_type").is_none());
    }

    #[test]
    fn serialization_roundtrip() {
        let record = sample();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: ParsedTitleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
