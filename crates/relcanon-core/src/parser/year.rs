use regex::Regex;

use crate::error::Result;
use crate::types::Year;

/// Finds the release year: the leftmost whole-word 19xx/20xx token.
///
/// Later digit groups are far more often sizes or bitrates, so only the
/// first candidate is considered.
#[derive(Debug, Clone)]
pub struct YearExtractor {
    re_year: Regex,
}

impl YearExtractor {
    /// Compiles the year pattern.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            // ASCII word boundaries: "1080p" and "x2024" never match, while
            // "2025年" still does.
            re_year: Regex::new(r"(?-u:\b)((?:19|20)[0-9]{2})(?-u:\b)")?,
        })
    }

    /// Returns the first year token, or [`Year::Unknown`].
    pub fn extract(&self, title: &str) -> Year {
        self.re_year
            .captures(title)
            .and_then(|c| c[1].parse::<u16>().ok())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(title: &str) -> Year {
        YearExtractor::new().unwrap().extract(title)
    }

    #[test]
    fn parenthesized_year() {
        assert_eq!(extract("Mardaani 3 (2026) [Hindi (LiNE)]"), Year::Known(2026));
    }

    #[test]
    fn leftmost_year_wins() {
        assert_eq!(extract("Show (Season 4) 2025 re-upload 2026"), Year::Known(2025));
    }

    #[test]
    fn resolution_tags_are_not_years() {
        assert_eq!(extract("Title 1080p 2160p x264"), Year::Unknown);
        assert_eq!(extract("Title 1999p"), Year::Unknown);
    }

    #[test]
    fn out_of_range_digits_ignored() {
        assert_eq!(extract("Blade Runner 2049"), Year::Known(2049));
        assert_eq!(extract("Room 1408"), Year::Unknown);
        assert_eq!(extract("3001 Nights"), Year::Unknown);
        assert_eq!(extract("Code 20255"), Year::Unknown);
    }

    #[test]
    fn year_next_to_non_ascii_text() {
        assert_eq!(extract("Film 2025年"), Year::Known(2025));
        assert_eq!(extract("Amélie–2001"), Year::Known(2001));
        assert_eq!(extract("Clip x2024"), Year::Unknown);
    }

    #[test]
    fn no_year_is_unknown() {
        assert_eq!(extract("The Great Indian Kapil Show (Season 4)"), Year::Unknown);
    }
}
