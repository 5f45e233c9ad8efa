/*!
 * Error types for the epgtidy application.
 *
 * Only document-level failures are errors. A programme with missing or
 * malformed fields is never an error: its fields are coerced to empty
 * strings by the field extractor and the run continues.
 */

use thiserror::Error;

/// Errors raised while loading or re-emitting a guide document
#[derive(Error, Debug)]
pub enum EpgError {
    /// The source could not be read (missing file, network failure, HTTP error status)
    #[error("Failed to fetch guide: {0}")]
    Fetch(String),

    /// The payload is not valid gzip or does not decompress to UTF-8 text
    #[error("Invalid compressed payload: {0}")]
    Format(String),

    /// The decompressed text is not a well-formed XMLTV document
    #[error("Failed to parse guide document: {0}")]
    Parse(String),
}

impl EpgError {
    /// Short label for the error kind, used in the fatal log line
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Format(_) => "format",
            Self::Parse(_) => "parse",
        }
    }
}

/// Kind label of the first `EpgError` in an error chain, or "other"
pub fn kind_of(error: &anyhow::Error) -> &'static str {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<EpgError>())
        .map_or("other", EpgError::kind)
}
