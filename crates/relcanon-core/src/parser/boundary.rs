//! # Display title extraction
//!
//! The display title is everything before the leftmost metadata marker,
//! with trailing noise peeled off until nothing more changes. Both stages
//! are driven by ordered rule lists so the priorities are data, not
//! control flow:
//!
//! 1. every [`BoundaryRule`] reports its leftmost match; the smallest
//!    offset wins and the text before it becomes the candidate;
//! 2. a leading "download " is dropped;
//! 3. the [`CleanupRule`] chain runs in passes until a full pass changes
//!    nothing.

use std::fmt;

use regex::Regex;
use tracing::{debug, trace};

use crate::config::ExtractorConfig;
use crate::error::Result;

/// A metadata marker whose leftmost occurrence ends the display title.
#[derive(Debug, Clone)]
pub struct BoundaryRule {
    name: &'static str,
    pattern: Regex,
}

impl BoundaryRule {
    /// Compiles a named boundary pattern.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if the pattern fails to compile.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Byte offset of the leftmost match, if any.
    pub fn locate(&self, title: &str) -> Option<usize> {
        self.pattern.find(title).map(|m| m.start())
    }
}

/// One step of the trailing-noise cleanup loop.
///
/// Implementations must return a strictly shorter string when they apply.
/// The loop discards any result that is not shorter, so a rule that matches
/// a zero-length span cannot stall it.
pub trait CleanupRule: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Returns `title` without its trailing noise, or `None` if the rule
    /// does not apply.
    fn strip<'a>(&self, title: &'a str) -> Option<&'a str>;
}

/// Removes the match of an end-anchored pattern, then trims.
#[derive(Debug, Clone)]
pub struct TrailingPattern {
    name: String,
    pattern: Regex,
}

impl TrailingPattern {
    /// Compiles a trailing pattern. The pattern should end in `$`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if the pattern fails to compile.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
        })
    }
}

impl CleanupRule for TrailingPattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn strip<'a>(&self, title: &'a str) -> Option<&'a str> {
        let m = self.pattern.find(title)?;
        if m.is_empty() {
            return None;
        }
        Some(title[..m.start()].trim())
    }
}

/// Extracts the human-facing title from a raw listing title.
#[derive(Debug)]
pub struct BoundaryTitleExtractor {
    boundary_rules: Vec<BoundaryRule>,
    cleanup_rules: Vec<Box<dyn CleanupRule>>,
    re_download: Regex,
}

impl BoundaryTitleExtractor {
    /// Builds the default rule chains for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if a pattern fails to compile.
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        Self::from_rules(default_boundary_rules()?, default_cleanup_rules(config)?)
    }

    /// Builds an extractor from explicit rule chains.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::RegexError` if the prefix pattern fails to
    /// compile.
    pub fn from_rules(
        boundary_rules: Vec<BoundaryRule>,
        cleanup_rules: Vec<Box<dyn CleanupRule>>,
    ) -> Result<Self> {
        Ok(Self {
            boundary_rules,
            cleanup_rules,
            re_download: Regex::new(r"(?i)^download\s+")?,
        })
    }

    pub fn boundary_rules(&self) -> &[BoundaryRule] {
        &self.boundary_rules
    }

    pub fn cleanup_rules(&self) -> &[Box<dyn CleanupRule>] {
        &self.cleanup_rules
    }

    /// Offset where the title ends: the leftmost match over all boundary
    /// rules, or the end of the string.
    pub fn cutoff(&self, title: &str) -> usize {
        let earliest = self
            .boundary_rules
            .iter()
            .filter_map(|rule| rule.locate(title).map(|offset| (offset, rule.name())))
            .min_by_key(|(offset, _)| *offset);

        match earliest {
            Some((offset, rule)) => {
                debug!(rule, offset, "title boundary");
                offset
            }
            None => title.len(),
        }
    }

    /// Returns the display title. May be empty.
    pub fn extract(&self, title: &str) -> String {
        let candidate = title[..self.cutoff(title)].trim();
        let mut current = match self.re_download.find(candidate) {
            Some(m) => &candidate[m.end()..],
            None => candidate,
        };

        loop {
            let before = current.len();
            for rule in &self.cleanup_rules {
                if let Some(stripped) = rule.strip(current) {
                    if stripped.len() < current.len() {
                        trace!(rule = rule.name(), stripped, "cleanup");
                        current = stripped;
                    }
                }
            }
            if current.len() == before {
                break;
            }
        }

        current.to_string()
    }
}

/// Parenthesized year, bracketed year, season marker, episode marker.
fn default_boundary_rules() -> Result<Vec<BoundaryRule>> {
    Ok(vec![
        BoundaryRule::new("parenthesized year", r"\(\s*(?:19|20)[0-9]{2}\s*\)")?,
        BoundaryRule::new("bracketed year", r"\[\s*(?:19|20)[0-9]{2}\s*\]")?,
        BoundaryRule::new("season", r"(?i)\b(?:season|s[0-9]+)\b")?,
        BoundaryRule::new("episode", r"(?i)\b(?:episode|ep\s*[0-9]+)\b")?,
    ])
}

/// Separator, trailing platform phrase, dangling opener, in that order.
fn default_cleanup_rules(config: &ExtractorConfig) -> Result<Vec<Box<dyn CleanupRule>>> {
    let mut rules: Vec<Box<dyn CleanupRule>> = vec![Box::new(TrailingPattern::new(
        "separator",
        r"\s*[-|:–—]\s*$",
    )?)];

    let platforms: Vec<String> = config
        .strippable_platforms()
        .map(phrase_pattern)
        .collect();
    if !platforms.is_empty() {
        let qualifiers: Vec<String> = config
            .platform_qualifiers
            .iter()
            .map(|q| phrase_pattern(q))
            .collect();
        let qualifier_group = if qualifiers.is_empty() {
            String::new()
        } else {
            format!(r"\s*(?:{})?", qualifiers.join("|"))
        };
        let pattern = format!(
            r"(?i)\s*[-|]?\s*\b(?:{}){}\s*$",
            platforms.join("|"),
            qualifier_group
        );
        rules.push(Box::new(TrailingPattern::new("platform phrase", &pattern)?));
    }

    rules.push(Box::new(TrailingPattern::new("open bracket", r"[(\[]$")?));
    Ok(rules)
}

/// Escapes a vocabulary phrase, letting its inner spaces match any run of
/// whitespace.
fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}
