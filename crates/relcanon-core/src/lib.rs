//! # relcanon core
//!
//! Turns freeform movie and series listing titles into structured,
//! canonical records for deduplication, search and catalog grouping.
//! Extraction is a deterministic, rule-ordered heuristic: no I/O, no
//! shared mutable state.
//!
//! ## Quick Start
//!
//! ```rust
//! use relcanon_core::parser::TitleExtractor;
//! use relcanon_core::ExtractorConfig;
//!
//! let extractor = TitleExtractor::new(ExtractorConfig::default()).unwrap();
//! let record = extractor
//!     .parse("Gangs of Wasseypur Part – 2 (2012) Hindi Full Movie BluRay 480p")
//!     .unwrap();
//!
//! assert_eq!(record.display_title, "Gangs of Wasseypur Part – 2");
//! assert_eq!(record.canonical_key, "gangsofwasseypurpart2|2012|movie");
//! assert_eq!(record.part, Some(2));
//! ```
pub mod config;
pub mod error;
pub mod parser;
pub mod scoring;
pub mod types;

// Re-export primary API
pub use config::{ExtractorConfig, PlatformEntry};
pub use error::{ExtractorError, Result};
pub use parser::{parse, KeyNormalizer, TitleExtractor};
pub use scoring::{ConfidenceScorer, ConfidenceWeights};
pub use types::{ContentType, ParsedTitleRecord, PartAdded, SeasonSpec, UpdateInfo, Year};
