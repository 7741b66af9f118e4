use serde::{Deserialize, Serialize};

/// Default confidence weights.
pub const WEIGHT_TITLE: f32 = 0.4;
pub const WEIGHT_YEAR: f32 = 0.3;
pub const WEIGHT_CONTENT_TYPE: f32 = 0.1;
pub const WEIGHT_QUALITY: f32 = 0.1;
pub const WEIGHT_LANGUAGE: f32 = 0.1;

/// Additive credit awarded for each extracted signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    pub title: f32,
    pub year: f32,
    /// Always awarded: classification falls back to movie, so a type is
    /// always assigned.
    pub content_type: f32,
    pub quality: f32,
    pub language: f32,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            title: WEIGHT_TITLE,
            year: WEIGHT_YEAR,
            content_type: WEIGHT_CONTENT_TYPE,
            quality: WEIGHT_QUALITY,
            language: WEIGHT_LANGUAGE,
        }
    }
}

impl ConfidenceWeights {
    /// Returns `true` if every weight is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [
            self.title,
            self.year,
            self.content_type,
            self.quality,
            self.language,
        ]
        .iter()
        .all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Which parts of a record were successfully extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSignals {
    pub has_title: bool,
    pub has_year: bool,
    pub has_quality: bool,
    pub has_language: bool,
}

/// Heuristic completeness score for a parsed record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceScorer {
    weights: ConfidenceWeights,
}

impl ConfidenceScorer {
    /// Creates a scorer with the given weights.
    #[must_use]
    pub fn new(weights: ConfidenceWeights) -> Self {
        Self { weights }
    }

    /// Weighted sum of the present signals, capped at `1.0`.
    /// There is no penalty term.
    #[must_use]
    pub fn score(&self, signals: ExtractionSignals) -> f32 {
        let w = &self.weights;
        let mut score = w.content_type;

        if signals.has_title {
            score += w.title;
        }
        if signals.has_year {
            score += w.year;
        }
        if signals.has_quality {
            score += w.quality;
        }
        if signals.has_language {
            score += w.language;
        }

        score.clamp(0.0, 1.0)
    }
}
