//! Error types for rs-block-importer.
//!
//! The import pipeline degrades instead of failing on malformed markup, so
//! these variants cover bad call-site input and internal logic defects only.

/// Error type for import operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL could not be parsed.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// A block table was requested without any data rows.
    #[error("Block table '{0}' has no data rows")]
    EmptyBlock(String),
}

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, Error>;
