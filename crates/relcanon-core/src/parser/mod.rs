pub mod boundary;
pub mod classify;
pub mod extractor;
pub mod metadata;
pub mod normalize;
pub mod update;
pub mod year;

pub use boundary::{BoundaryRule, BoundaryTitleExtractor, CleanupRule, TrailingPattern};
pub use classify::Classifier;
pub use extractor::{parse, TitleExtractor};
pub use metadata::{Metadata, MetadataExtractor, NumberPatterns, NumberedField};
pub use normalize::KeyNormalizer;
pub use update::UpdateInfoExtractor;
pub use year::YearExtractor;
