use regex::Regex;

use crate::error::Result;
use crate::types::ContentType;

/// Decides movie vs series from whole-word series markers.
#[derive(Debug, Clone)]
pub struct Classifier {
    re_series: Regex,
}

impl Classifier {
    /// Compiles the series-marker pattern.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_series: Regex::new(r"(?i)\b(?:season|s[0-9]+|ep|episode|series)\b")?,
        })
    }

    /// `Series` if any marker is present, otherwise the `Movie` default.
    pub fn classify(&self, title: &str) -> ContentType {
        if self.re_series.is_match(title) {
            ContentType::Series
        } else {
            ContentType::Movie
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(title: &str) -> ContentType {
        Classifier::new().unwrap().classify(title)
    }

    #[test]
    fn series_markers() {
        assert_eq!(classify("Panchayat (2025) Season 4 Hindi"), ContentType::Series);
        assert_eq!(classify("Show S02 720p"), ContentType::Series);
        assert_eq!(classify("Show Ep 3"), ContentType::Series);
        assert_eq!(classify("Show Episode 12"), ContentType::Series);
        assert_eq!(classify("Kota Factory Netflix Series"), ContentType::Series);
    }

    #[test]
    fn movie_is_default() {
        assert_eq!(classify("Superman (2025) IMAX WEB-DL"), ContentType::Movie);
        assert_eq!(classify(""), ContentType::Movie);
    }

    #[test]
    fn markers_must_be_whole_words() {
        assert_eq!(classify("Seasoned Chefs (2020)"), ContentType::Movie);
        assert_eq!(classify("Deep Sea S3cret"), ContentType::Movie);
        assert_eq!(classify("Step Brothers (2008)"), ContentType::Movie);
    }
}
