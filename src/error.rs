use thiserror::Error;

#[derive(Error, Debug)]
pub enum MosaicError {
    /// Malformed or truncated block buffer.
    #[error("malformed block: {0}")]
    MalformedBlock(String),

    /// Bad query key or query outside the addressable grid.
    #[error("query error: {0}")]
    Query(String),

    /// The engine refused or failed a dispatched query.
    #[error("query dispatch failed: {0}")]
    QueryFailed(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Manifest serialization or lookup failure.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch all for unexpected internal problems.
    #[error("internal error: {0}")]
    Internal(String),
}
