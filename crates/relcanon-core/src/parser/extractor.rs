//! # Title Extractor
//!
//! The public entry point. Runs the components in dependency order and
//! assembles a [`ParsedTitleRecord`]:
//!
//! classify → year → display title → machine title → metadata → update
//! info → canonical key → confidence

use tracing::{debug, trace};

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::parser::boundary::BoundaryTitleExtractor;
use crate::parser::classify::Classifier;
use crate::parser::metadata::MetadataExtractor;
use crate::parser::normalize::KeyNormalizer;
use crate::parser::update::UpdateInfoExtractor;
use crate::parser::year::YearExtractor;
use crate::scoring::{ConfidenceScorer, ExtractionSignals};
use crate::types::ParsedTitleRecord;

/// Converts release titles into [`ParsedTitleRecord`]s.
///
/// All configuration is compiled at construction and never mutated, so a
/// single extractor can be shared across threads.
#[derive(Debug)]
pub struct TitleExtractor {
    classifier: Classifier,
    years: YearExtractor,
    titles: BoundaryTitleExtractor,
    normalizer: KeyNormalizer,
    metadata: MetadataExtractor,
    updates: UpdateInfoExtractor,
    scorer: ConfidenceScorer,
}

impl TitleExtractor {
    /// Validates `config` and compiles every pattern.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::InvalidConfig` if the configuration is
    /// rejected, or `ExtractorError::RegexError` if a pattern built from it
    /// fails to compile.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;

        let metadata = MetadataExtractor::new(&config)?;
        let updates = UpdateInfoExtractor::new(metadata.numbers().clone())?;

        debug!(
            stopwords = config.stopwords.len(),
            numerals = config.numerals.len(),
            platforms = config.platforms.len(),
            languages = config.languages.len(),
            qualities = config.qualities.len(),
            "title extractor ready"
        );

        Ok(Self {
            classifier: Classifier::new()?,
            years: YearExtractor::new()?,
            titles: BoundaryTitleExtractor::new(&config)?,
            normalizer: KeyNormalizer::new(&config)?,
            metadata,
            updates,
            scorer: ConfidenceScorer::new(config.confidence),
        })
    }

    /// Parses a raw listing title.
    ///
    /// Returns `None` for empty or whitespace-only input; every other input
    /// yields a record.
    ///
    /// # Examples
    /// ```
    /// use relcanon_core::config::ExtractorConfig;
    /// use relcanon_core::parser::TitleExtractor;
    /// use relcanon_core::types::{ContentType, SeasonSpec, Year};
    ///
    /// let extractor = TitleExtractor::new(ExtractorConfig::default()).unwrap();
    /// let record = extractor
    ///     .parse("Panchayat (2025) Season 4 Hindi Complete Amazon Original WEB Series 480p")
    ///     .unwrap();
    ///
    /// assert_eq!(record.display_title, "Panchayat");
    /// assert_eq!(record.canonical_key, "panchayat|2025|series");
    /// assert_eq!(record.content_type, ContentType::Series);
    /// assert_eq!(record.year, Year::Known(2025));
    /// assert_eq!(record.season, Some(SeasonSpec::Single(4)));
    /// assert!(extractor.parse("").is_none());
    /// ```
    pub fn parse(&self, raw_title: &str) -> Option<ParsedTitleRecord> {
        let title = raw_title.trim();
        if title.is_empty() {
            return None;
        }

        let content_type = self.classifier.classify(title);
        let year = self.years.extract(title);
        let display_title = self.titles.extract(title);
        let machine_title = self.normalizer.normalize(&display_title);
        let metadata = self.metadata.extract(title);
        let update_info = self.updates.extract(title);
        let canonical_key =
            ParsedTitleRecord::canonical_key_for(&machine_title, year, content_type);

        let confidence = self.scorer.score(ExtractionSignals {
            has_title: !display_title.is_empty(),
            has_year: year.is_known(),
            has_quality: !metadata.qualities.is_empty(),
            has_language: !metadata.languages.is_empty(),
        });

        let record = ParsedTitleRecord {
            display_title,
            machine_title,
            canonical_key,
            content_type,
            year,
            season: metadata.season,
            part: metadata.part,
            volume: metadata.volume,
            episode: metadata.episode,
            update_info,
            languages: metadata.languages,
            qualities: metadata.qualities,
            platform: metadata.platform,
            confidence,
        };
        trace!(%record, "parsed");
        Some(record)
    }

    /// Machine title for an arbitrary display title, using this
    /// extractor's stopwords and numerals.
    pub fn machine_title(&self, display_title: &str) -> String {
        self.normalizer.normalize(display_title)
    }
}

/// Convenience function to parse a title with the default configuration.
///
/// Builds a fresh extractor on every call; reuse a [`TitleExtractor`] when
/// parsing many titles.
///
/// # Errors
///
/// Returns an error only if the default configuration fails to compile.
pub fn parse(raw_title: &str) -> Result<Option<ParsedTitleRecord>> {
    let extractor = TitleExtractor::new(ExtractorConfig::default())?;
    Ok(extractor.parse(raw_title))
}
