//! Machine-title normalization.
//!
//! Pipeline, applied in order:
//! 1. Lowercase
//! 2. Standalone roman numerals → decimals ("ii" → "2")
//! 3. Standalone stopwords removed
//! 4. Everything outside `[a-z0-9]` removed, whitespace included
//!
//! The pipeline is repeated until it reaches a fixed point. Step 4 can glue
//! fragments into a fresh numeral or stopword ("T.H.E" → "the"); after the
//! first pass the whole key is a single token, so at most two more passes
//! can change it.

use std::collections::BTreeMap;

use regex::{Captures, Regex};

use crate::config::ExtractorConfig;
use crate::error::Result;

/// Derives the machine-comparable key from a display title.
#[derive(Debug, Clone)]
pub struct KeyNormalizer {
    numerals: BTreeMap<String, u32>,
    re_numeral: Option<Regex>,
    re_stopword: Option<Regex>,
    re_non_alnum: Regex,
}

impl KeyNormalizer {
    /// Compiles the numeral and stopword patterns from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if a pattern fails to compile.
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let numerals: BTreeMap<String, u32> = config
            .numerals
            .iter()
            .map(|(numeral, value)| (numeral.to_lowercase(), *value))
            .collect();
        let stopwords: Vec<String> = config.stopwords.iter().map(|s| s.to_lowercase()).collect();

        Ok(Self {
            re_numeral: word_alternation(numerals.keys().map(String::as_str))?,
            re_stopword: word_alternation(stopwords.iter().map(String::as_str))?,
            numerals,
            re_non_alnum: Regex::new(r"[^a-z0-9]+")?,
        })
    }

    /// Returns the machine title for `display_title`.
    ///
    /// The result contains only `[a-z0-9]` and is idempotent:
    /// `normalize(normalize(s)) == normalize(s)`.
    pub fn normalize(&self, display_title: &str) -> String {
        let mut key = self.pass(display_title);
        loop {
            let next = self.pass(&key);
            if next == key {
                return key;
            }
            key = next;
        }
    }

    fn pass(&self, text: &str) -> String {
        let mut text = text.to_lowercase();

        if let Some(ref re) = self.re_numeral {
            text = re
                .replace_all(&text, |caps: &Captures| match self.numerals.get(&caps[0]) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                })
                .into_owned();
        }
        if let Some(ref re) = self.re_stopword {
            text = re.replace_all(&text, "").into_owned();
        }

        self.re_non_alnum.replace_all(&text, "").into_owned()
    }
}

/// `\b(?:w1|w2|...)\b` over escaped words, longest first; `None` when empty.
fn word_alternation<'a>(words: impl Iterator<Item = &'a str>) -> Result<Option<Regex>> {
    let mut words: Vec<&str> = words.collect();
    if words.is_empty() {
        return Ok(None);
    }
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation = words
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    Ok(Some(Regex::new(&format!(r"\b(?:{alternation})\b"))?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> KeyNormalizer {
        KeyNormalizer::new(&ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn lowercases_and_collapses() {
        assert_eq!(normalizer().normalize("Panchayat"), "panchayat");
        assert_eq!(
            normalizer().normalize("Gangs of Wasseypur Part – 2"),
            "gangsofwasseypurpart2"
        );
    }

    #[test]
    fn converts_standalone_numerals() {
        let n = normalizer();
        assert_eq!(n.normalize("Rocky II"), "rocky2");
        assert_eq!(n.normalize("Final Fantasy VII"), "finalfantasy7");
        assert_eq!(n.normalize("Part IX: Finale"), "part9finale");
    }

    #[test]
    fn numerals_inside_words_untouched() {
        let n = normalizer();
        assert_eq!(n.normalize("Vivid Civic Mix"), "vividcivicmix");
        assert_eq!(n.normalize("Xmen Vixen"), "xmenvixen");
    }

    #[test]
    fn removes_stopwords() {
        let n = normalizer();
        assert_eq!(n.normalize("The Raja Saab"), "rajasaab");
        assert_eq!(n.normalize("A Quiet Place"), "quietplace");
        assert_eq!(n.normalize("An Action Hero"), "actionhero");
        assert_eq!(n.normalize("Theory of Anything"), "theoryofanything");
    }

    #[test]
    fn output_alphabet_is_ascii_alnum() {
        let n = normalizer();
        for title in ["Amélie – L'été", "  Spaced   Out  ", "100% [Uncut]!", "東京 Story"] {
            let key = n.normalize(title);
            assert!(
                key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "bad key {key:?} for {title:?}"
            );
        }
    }

    #[test]
    fn idempotent_even_when_punctuation_glues_tokens() {
        let n = normalizer();
        assert_eq!(n.normalize("T.H.E"), "");
        assert_eq!(n.normalize("I.I"), "11");
        for title in ["T.H.E", "V-I", "A.N", "Rocky II", "The 50", "x"] {
            let once = n.normalize(title);
            assert_eq!(n.normalize(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn custom_vocabulary() {
        let config = ExtractorConfig::new()
            .with_stopwords(["of"])
            .with_numerals([("xi", 11)]);
        let n = KeyNormalizer::new(&config).unwrap();
        assert_eq!(n.normalize("The Order of XI"), "theorder11");
    }

    #[test]
    fn empty_vocabularies_only_collapse() {
        let config = ExtractorConfig::new()
            .with_stopwords(Vec::<String>::new())
            .with_numerals(Vec::<(String, u32)>::new());
        let n = KeyNormalizer::new(&config).unwrap();
        assert_eq!(n.normalize("The Movie II"), "themovieii");
    }
}
