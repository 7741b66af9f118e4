use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Content classification of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Feature film or any title without series markers.
    #[default]
    Movie,
    /// Episodic content: seasons, episodes, web series.
    Series,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// Release year, or the `unknown` sentinel when no 19xx/20xx token exists.
///
/// Serializes as a JSON number or the string `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Year {
    /// A four digit year in `1900..=2099`.
    Known(u16),
    /// No year-like token was found.
    #[default]
    Unknown,
}

impl Year {
    /// Sentinel text used in canonical keys and JSON output.
    pub const UNKNOWN: &'static str = "unknown";

    /// Returns the numeric year, if known.
    #[must_use]
    pub fn value(self) -> Option<u16> {
        match self {
            Self::Known(year) => Some(year),
            Self::Unknown => None,
        }
    }

    /// Returns `true` unless this is the sentinel.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<u16>> for Year {
    fn from(value: Option<u16>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(year) => write!(f, "{year}"),
            Self::Unknown => f.write_str(Self::UNKNOWN),
        }
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(year) => serializer.serialize_u16(*year),
            Self::Unknown => serializer.serialize_str(Self::UNKNOWN),
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u16),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(year) => Ok(Self::Known(year)),
            Repr::Text(text) if text == Self::UNKNOWN => Ok(Self::Unknown),
            Repr::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a year or {:?}, found {text:?}",
                Self::UNKNOWN
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_defaults_to_movie() {
        assert_eq!(ContentType::default(), ContentType::Movie);
        assert_eq!(ContentType::Series.to_string(), "series");
    }

    #[test]
    fn year_display_uses_sentinel() {
        assert_eq!(Year::Known(2025).to_string(), "2025");
        assert_eq!(Year::Unknown.to_string(), "unknown");
        assert_eq!(Year::from(None), Year::Unknown);
        assert_eq!(Year::from(Some(1999)).value(), Some(1999));
    }

    #[test]
    fn year_json_shape() {
        assert_eq!(serde_json::to_string(&Year::Known(2012)).unwrap(), "2012");
        assert_eq!(serde_json::to_string(&Year::Unknown).unwrap(), "\"unknown\"");

        let year: Year = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(year, Year::Unknown);
        assert!(serde_json::from_str::<Year>("\"soon\"").is_err());
    }
}
