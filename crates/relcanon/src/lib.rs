//! # relcanon
//!
//! Canonical, deduplicable records from freeform movie and series release
//! titles. This crate re-exports [`relcanon_core`].
//!
//! ```rust
//! let record = relcanon::parse("Panchayat (2025) Season 4 Hindi Amazon Original")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(record.canonical_key, "panchayat|2025|series");
//! assert_eq!(record.platform, "Amazon");
//! ```
pub use relcanon_core::*;
