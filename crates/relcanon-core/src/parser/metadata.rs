use regex::Regex;

use crate::config::{ExtractorConfig, PlatformEntry};
use crate::error::Result;
use crate::types::{ParsedTitleRecord, SeasonSpec};

/// Optional separator between a keyword and its number: "Ep-09", "Vol. 1",
/// "Part – 2".
const NUMBER_SEPARATOR: &str = r"\s*[-.–—]?\s*";

/// A "keyword <n>" field such as "Episode 8" or "Vol 3".
#[derive(Debug, Clone)]
pub struct NumberedField {
    pattern: Regex,
}

impl NumberedField {
    /// `keywords` is a regex alternation, e.g. `volume|vol`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if the pattern fails to compile.
    pub fn new(keywords: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(&format!(
                r"(?i)\b(?:{keywords}){NUMBER_SEPARATOR}([0-9]+)\b"
            ))?,
        })
    }

    /// Number of the first occurrence in `text`.
    pub fn first(&self, text: &str) -> Option<u32> {
        self.pattern
            .captures(text)
            .and_then(|c| c[1].parse().ok())
    }
}

/// Episode, part and volume patterns, shared with update extraction.
#[derive(Debug, Clone)]
pub struct NumberPatterns {
    pub episode: NumberedField,
    pub part: NumberedField,
    pub volume: NumberedField,
}

impl NumberPatterns {
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            episode: NumberedField::new("episode|ep")?,
            part: NumberedField::new("part")?,
            volume: NumberedField::new("volume|vol")?,
        })
    }
}

/// Release metadata pulled from the full raw title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    pub season: Option<SeasonSpec>,
    pub episode: Option<u32>,
    pub part: Option<u32>,
    pub volume: Option<u32>,
    pub languages: Vec<String>,
    pub qualities: Vec<String>,
    pub platform: String,
}

/// Extracts season/episode/part/volume numbers and vocabulary tags.
///
/// Works on the raw title, not the display title: metadata usually sits
/// after the title boundary.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    re_season_range: Regex,
    re_season: Regex,
    numbers: NumberPatterns,
    max_season_span: u32,
    /// (lowercased needle, reported name)
    languages: Vec<(String, String)>,
    qualities: Vec<(Regex, String)>,
    platforms: Vec<(String, String)>,
}

impl MetadataExtractor {
    /// Compiles the metadata patterns for the given vocabularies.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if a pattern fails to compile.
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let qualities = config
            .qualities
            .iter()
            .map(|q| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(q)))?;
                Ok((re, q.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            re_season_range: Regex::new(
                r"(?i)\b(?:season|s)\s*([0-9]+)\s*-\s*([0-9]+)\b",
            )?,
            re_season: Regex::new(r"(?i)\b(?:season|s)\s*([0-9]+)\b")?,
            numbers: NumberPatterns::new()?,
            max_season_span: config.max_season_span,
            languages: config
                .languages
                .iter()
                .map(|l| (l.to_lowercase(), l.clone()))
                .collect(),
            qualities,
            platforms: config
                .platforms
                .iter()
                .map(|PlatformEntry { keyword, display }| {
                    (keyword.to_lowercase(), display.clone())
                })
                .collect(),
        })
    }

    pub fn numbers(&self) -> &NumberPatterns {
        &self.numbers
    }

    pub fn extract(&self, title: &str) -> Metadata {
        let lower = title.to_lowercase();

        Metadata {
            season: self.extract_season(title),
            episode: self.numbers.episode.first(title),
            part: self.numbers.part.first(title),
            volume: self.numbers.volume.first(title),
            languages: self.extract_languages(&lower),
            qualities: self.extract_qualities(title),
            platform: self.extract_platform(&lower),
        }
    }

    /// A range takes precedence over a single season, and a reversed range
    /// yields an empty list. A range wider than `max_season_span` falls
    /// through to the single pattern.
    fn extract_season(&self, title: &str) -> Option<SeasonSpec> {
        let range = self.re_season_range.captures(title).and_then(|c| {
            let start: u32 = c[1].parse().ok()?;
            let end: u32 = c[2].parse().ok()?;
            SeasonSpec::range(start, end, self.max_season_span)
        });
        if range.is_some() {
            return range;
        }

        self.re_season
            .captures(title)
            .and_then(|c| c[1].parse().ok())
            .map(SeasonSpec::Single)
    }

    /// Every vocabulary entry found as a substring, in vocabulary order.
    fn extract_languages(&self, lower: &str) -> Vec<String> {
        self.languages
            .iter()
            .filter(|(needle, _)| lower.contains(needle.as_str()))
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Every vocabulary entry found as a whole word, in vocabulary order.
    fn extract_qualities(&self, title: &str) -> Vec<String> {
        self.qualities
            .iter()
            .filter(|(re, _)| re.is_match(title))
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// First platform in priority order, not first in the title.
    fn extract_platform(&self, lower: &str) -> String {
        self.platforms
            .iter()
            .find(|(keyword, _)| lower.contains(keyword.as_str()))
            .map_or_else(
                || ParsedTitleRecord::UNKNOWN_PLATFORM.to_string(),
                |(_, display)| display.clone(),
            )
    }
}
