use thiserror::Error;

/// Errors that can occur while building a title extractor.
///
/// Parsing itself is total: once an extractor exists, every input yields
/// either a record or `None`. Only configuration can fail.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// A pattern built from the configured vocabulary failed to compile.
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The configuration was rejected before any pattern was compiled.
    #[error("invalid extractor configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be decoded.
    #[error("failed to decode configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for extractor construction.
pub type Result<T> = std::result::Result<T, ExtractorError>;
