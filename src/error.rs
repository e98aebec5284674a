//! Error types for the paperfetch crate.

/// Errors that can occur while resolving or downloading a paper.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed without a response (network, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Failed to parse an API response body.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// No search candidate scored acceptably against the citation.
    #[error("no match")]
    NoMatch,

    /// The matched work carries no usable location URL.
    #[error("no URL found")]
    NoUrl,

    /// Downloaded bytes do not start with the PDF signature.
    #[error("Not a PDF (header={header:?}) from {url}")]
    NotPdf { url: String, header: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for Results using [`FetchError`].
pub type Result<T> = std::result::Result<T, FetchError>;
