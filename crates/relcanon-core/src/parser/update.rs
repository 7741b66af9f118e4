use regex::Regex;

use crate::error::Result;
use crate::parser::metadata::NumberPatterns;
use crate::types::{PartAdded, UpdateInfo};

/// Detects "added" and "complete" annotations.
///
/// Numbers are only read from bracketed spans that mention "added"
/// ("[Ep 08 Added]", "(S05 Vol3 Ep08 Added)"). When no such span exists but
/// the word appears anyway, the whole title is used as one span. Spans are
/// visited left to right and the first value found for each field is kept.
#[derive(Debug, Clone)]
pub struct UpdateInfoExtractor {
    re_added_span: Regex,
    re_added: Regex,
    re_part_list: Regex,
    re_part_added: Regex,
    re_complete: Regex,
    numbers: NumberPatterns,
}

impl UpdateInfoExtractor {
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if a pattern fails to compile.
    pub fn new(numbers: NumberPatterns) -> Result<Self> {
        Ok(Self {
            re_added_span: Regex::new(r"(?i)[\[(][^\[\]()]*\badded\b[^\[\]()]*[\])]?")?,
            re_added: Regex::new(r"(?i)\badded\b")?,
            re_part_list: Regex::new(r"(?i)\bpart\s*[-.–—]?\s*[0-9]+\s*&\s*[0-9]+")?,
            re_part_added: Regex::new(r"(?i)\bpart\s+added\b")?,
            re_complete: Regex::new(r"(?i)\b(?:complete|all\s+episodes)\b")?,
            numbers,
        })
    }

    /// Spans that carry "added" information, in discovery order.
    pub fn added_spans<'a>(&self, title: &'a str) -> Vec<&'a str> {
        let spans: Vec<&str> = self
            .re_added_span
            .find_iter(title)
            .map(|m| m.as_str())
            .collect();

        if spans.is_empty() && self.re_added.is_match(title) {
            vec![title]
        } else {
            spans
        }
    }

    pub fn extract(&self, title: &str) -> UpdateInfo {
        let mut info = UpdateInfo::default();

        for span in self.added_spans(title) {
            if info.episode_added.is_none() {
                info.episode_added = self.numbers.episode.first(span);
            }
            if info.volume_added.is_none() {
                info.volume_added = self.numbers.volume.first(span);
            }
            if !info.part_added.is_set() {
                info.part_added = self.part_added(span);
            }
        }

        if self.re_complete.is_match(title) {
            info.complete = Some(true);
        }

        info
    }

    /// "Part 1 & 2" → unspecified, "Part 2" → 2, bare "Part Added" →
    /// unspecified.
    fn part_added(&self, span: &str) -> PartAdded {
        if self.re_part_list.is_match(span) {
            return PartAdded::Unspecified;
        }
        if let Some(part) = self.numbers.part.first(span) {
            return PartAdded::Part(part);
        }
        if self.re_part_added.is_match(span) {
            return PartAdded::Unspecified;
        }
        PartAdded::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> UpdateInfoExtractor {
        UpdateInfoExtractor::new(NumberPatterns::new().unwrap()).unwrap()
    }

    fn extract(title: &str) -> UpdateInfo {
        extractor().extract(title)
    }

    #[test]
    fn episode_added_in_brackets() {
        assert_eq!(extract("The 50 (2026) Season 1 [Ep-09 Added] 480p").episode_added, Some(9));
        assert_eq!(extract("Show (Season 4) 2025 (Ep08 Added) NETFLIX").episode_added, Some(8));
    }

    #[test]
    fn volume_and_episode_in_one_span() {
        let info = extract("Stranger Things (Season 5) (S05 Vol3 Ep08 Added) NETFLIX Series");
        assert_eq!(info.volume_added, Some(3));
        assert_eq!(info.episode_added, Some(8));
        assert_eq!(info.part_added, PartAdded::No);

        let info = extract("Stranger Things (Season 5) | NF Series | [VOL-3 | EP-08 Added]");
        assert_eq!(info.volume_added, Some(3));
        assert_eq!(info.episode_added, Some(8));
    }

    #[test]
    fn spans_without_added_are_ignored() {
        let info = extract("Show (Season 4) Ep 3 [Hindi (DD5.1) - English] [Vol 2 Added]");
        assert_eq!(info.episode_added, None);
        assert_eq!(info.volume_added, Some(2));

        let spans = extractor().added_spans("A [Hindi (DD5.1) - English] [Part 1 & 2 Added] B");
        assert_eq!(spans, ["[Part 1 & 2 Added]"]);
    }

    #[test]
    fn part_added_forms() {
        assert_eq!(
            extract("Wednesday (Season 2) [Part 1 & 2 Added] NETFLIX").part_added,
            PartAdded::Unspecified
        );
        assert_eq!(extract("Show [Part 2 Added]").part_added, PartAdded::Part(2));
        assert_eq!(extract("Show [Part Added]").part_added, PartAdded::Unspecified);
        assert_eq!(extract("Show Part 3 [Ep 4 Added]").part_added, PartAdded::No);
    }

    #[test]
    fn first_span_wins_per_field() {
        let info = extract("Show [Ep 3 Added] [Ep 4 Added] [Vol 2 Added]");
        assert_eq!(info.episode_added, Some(3));
        assert_eq!(info.volume_added, Some(2));
    }

    #[test]
    fn unbracketed_added_uses_whole_title() {
        let info = extract("Show S01 Ep 5 Added Hindi");
        assert_eq!(info.episode_added, Some(5));
        assert_eq!(extractor().added_spans("Show Ep 5 Added"), ["Show Ep 5 Added"]);
    }

    #[test]
    fn no_added_word_means_no_numbers() {
        let info = extract("Show Season 2 Ep 7 Vol 1");
        assert_eq!(info.episode_added, None);
        assert_eq!(info.volume_added, None);
        assert!(info.is_empty());
        assert!(extractor().added_spans("Readded Edition").is_empty());
    }

    #[test]
    fn complete_flag() {
        assert_eq!(extract("Panchayat Season 4 Hindi Complete WEB Series").complete, Some(true));
        assert_eq!(extract("Stranger Things (S04) [ALL Episodes] | NF Series").complete, Some(true));
        assert_eq!(extract("Show Season 4 Incomplete Completed").complete, None);
    }
}
