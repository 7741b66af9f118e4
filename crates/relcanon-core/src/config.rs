//! Extractor configuration.
//!
//! Every vocabulary the extractor consults lives here so catalogs can tune
//! it without touching the rules. Defaults match common Indian web-listing
//! conventions (Hindi dubs, OTT platforms, "Ep 08 Added" style updates).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractorError, Result};
use crate::scoring::ConfidenceWeights;

/// A platform keyword and the display form reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEntry {
    /// Case-insensitive substring searched for in the raw title.
    pub keyword: String,
    /// Value reported in `ParsedTitleRecord::platform`.
    pub display: String,
}

impl PlatformEntry {
    /// Entry whose display form is the keyword with its first letter
    /// uppercased ("netflix" → "Netflix").
    pub fn capitalized(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let mut chars = keyword.chars();
        let display = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self { keyword, display }
    }

    /// Entry with an explicit display form.
    pub fn with_display(keyword: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            display: display.into(),
        }
    }
}

/// Configuration for a [`TitleExtractor`](crate::parser::TitleExtractor).
///
/// ```
/// use relcanon_core::config::ExtractorConfig;
///
/// let config = ExtractorConfig::new()
///     .with_stopwords(["the", "a", "an", "of"])
///     .with_max_season_span(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Whole words dropped from machine titles.
    pub stopwords: Vec<String>,
    /// Standalone roman numerals rewritten to decimals in machine titles.
    pub numerals: BTreeMap<String, u32>,
    /// Platforms in priority order; the first one found wins.
    pub platforms: Vec<PlatformEntry>,
    /// Words that may follow a trailing platform name ("Netflix Original").
    /// Platform keywords listed here are never stripped from display titles.
    pub platform_qualifiers: Vec<String>,
    /// Audio language vocabulary, matched as case-insensitive substrings.
    pub languages: Vec<String>,
    /// Quality tag vocabulary, matched as case-insensitive whole words.
    pub qualities: Vec<String>,
    /// Largest number of seasons a range may expand to.
    pub max_season_span: u32,
    /// Confidence score weights.
    pub confidence: ConfidenceWeights,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let numerals = [
            ("i", 1),
            ("ii", 2),
            ("iii", 3),
            ("iv", 4),
            ("v", 5),
            ("vi", 6),
            ("vii", 7),
            ("viii", 8),
            ("ix", 9),
            ("x", 10),
        ]
        .into_iter()
        .map(|(numeral, value)| (numeral.to_string(), value))
        .collect();

        let platforms = vec![
            PlatformEntry::capitalized("netflix"),
            PlatformEntry::capitalized("amazon"),
            PlatformEntry::capitalized("hulu"),
            PlatformEntry::capitalized("disney"),
            PlatformEntry::capitalized("hotstar"),
            PlatformEntry::capitalized("zee5"),
            PlatformEntry::capitalized("sony"),
            PlatformEntry::with_display("appletv", "AppleTV"),
            PlatformEntry::with_display("hbo", "HBO"),
            PlatformEntry::capitalized("prime"),
            PlatformEntry::capitalized("original"),
            PlatformEntry::capitalized("series"),
        ];

        Self {
            stopwords: strings(&["the", "a", "an"]),
            numerals,
            platforms,
            platform_qualifiers: strings(&["original", "series", "web series", "tv show"]),
            languages: strings(&[
                "Hindi",
                "English",
                "Tamil",
                "Telugu",
                "Malayalam",
                "Kannada",
                "Korean",
                "Japanese",
                "Chinese",
                "Spanish",
                "French",
                "Dual Audio",
                "Multi Audio",
            ]),
            qualities: strings(&[
                "480p", "720p", "1080p", "2160p", "4K", "HDR", "SDR", "WEB-DL", "BluRay", "HDTC",
                "CAM",
            ]),
            max_season_span: 1000,
            confidence: ConfidenceWeights::default(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl ExtractorConfig {
    /// Create a configuration with the default vocabularies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a configuration from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::ConfigParse` if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the stopword set.
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the numeral table.
    pub fn with_numerals<I, S>(mut self, numerals: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        self.numerals = numerals.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    /// Replace the platform vocabulary. Order is priority order.
    pub fn with_platforms(mut self, platforms: Vec<PlatformEntry>) -> Self {
        self.platforms = platforms;
        self
    }

    /// Replace the platform qualifier words.
    pub fn with_platform_qualifiers<I, S>(mut self, qualifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platform_qualifiers = qualifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the language vocabulary.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the quality vocabulary.
    pub fn with_qualities<I, S>(mut self, qualities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.qualities = qualities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the largest season range that is expanded into a list.
    pub fn with_max_season_span(mut self, span: u32) -> Self {
        self.max_season_span = span;
        self
    }

    /// Set the confidence weights.
    pub fn with_confidence_weights(mut self, weights: ConfidenceWeights) -> Self {
        self.confidence = weights;
        self
    }

    /// Platform keywords eligible for trailing-phrase stripping, i.e. the
    /// platforms that are not qualifiers themselves.
    pub fn strippable_platforms(&self) -> impl Iterator<Item = &str> {
        self.platforms
            .iter()
            .map(|p| p.keyword.as_str())
            .filter(|keyword| {
                !self
                    .platform_qualifiers
                    .iter()
                    .any(|q| q.eq_ignore_ascii_case(keyword))
            })
    }

    /// Check the configuration before any pattern is compiled.
    ///
    /// Every vocabulary entry must be non-empty so that no rule can match a
    /// zero-length span.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::InvalidConfig` describing the first problem.
    pub fn validate(&self) -> Result<()> {
        non_empty("stopword", &self.stopwords)?;
        non_empty("platform qualifier", &self.platform_qualifiers)?;
        non_empty("language", &self.languages)?;
        non_empty("quality", &self.qualities)?;

        for numeral in self.numerals.keys() {
            if numeral.is_empty() || !numeral.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(ExtractorError::InvalidConfig(format!(
                    "numeral {numeral:?} must be non-empty lowercase ASCII letters"
                )));
            }
        }
        for (index, platform) in self.platforms.iter().enumerate() {
            if platform.keyword.trim().is_empty() {
                return Err(ExtractorError::InvalidConfig(format!(
                    "platform keyword at index {index} is empty"
                )));
            }
        }
        if self.max_season_span == 0 {
            return Err(ExtractorError::InvalidConfig(
                "max_season_span must be at least 1".into(),
            ));
        }
        if !self.confidence.is_valid() {
            return Err(ExtractorError::InvalidConfig(
                "confidence weights must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}

fn non_empty(what: &str, entries: &[String]) -> Result<()> {
    match entries.iter().position(|e| e.trim().is_empty()) {
        Some(index) => Err(ExtractorError::InvalidConfig(format!(
            "{what} at index {index} is empty"
        ))),
        None => Ok(()),
    }
}
