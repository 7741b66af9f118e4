pub mod confidence;

pub use confidence::{ConfidenceScorer, ConfidenceWeights, ExtractionSignals};
