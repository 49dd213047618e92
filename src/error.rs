//! Error types for HAL client operations.
//!
//! All fallible operations in this crate return [`Result`], a shorthand for
//! `Result<T, HalError>`. Errors are surfaced directly to the caller: there is
//! no retry logic and no silent recovery anywhere in the crate. Note that a
//! non-2xx HTTP response is *not* an error: HAL APIs routinely return
//! structured error bodies with non-2xx codes, so the status is exposed via
//! `Navigator::status()` and left to the caller to branch on.

use thiserror::Error;

/// Result type for HAL client operations.
pub type Result<T> = std::result::Result<T, HalError>;

/// Errors that can occur while parsing HAL documents or following links.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HalError {
    /// JSON serialization or deserialization error.
    ///
    /// The response body (or caller-supplied text) was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The value handed to `Resource::from_value` was valid JSON but not an
    /// object, or a `_links`/`_embedded` entry had a shape that cannot be a
    /// link or an embedded document.
    #[error("cannot build a resource from {0}")]
    InvalidDocument(String),

    /// A link or embedded-resource relation was looked up but is not present
    /// on the resource.
    ///
    /// Raised by `get_link`/`get_href`/`get_resource`, and by
    /// `Navigator::get`/`post` before any request is issued.
    #[error("relation not found: {0}")]
    RelationNotFound(String),

    /// A property was looked up but is not present on the resource.
    #[error("property not found: {0}")]
    PropertyNotFound(String),

    /// A multi-valued relation was indexed past its end.
    #[error("relation {rel:?} has {len} links, no index {index}")]
    LinkIndexOutOfRange { rel: String, index: usize, len: usize },

    /// A response header was looked up but is not present.
    ///
    /// Lookup ignores ASCII case, so this means no transport-normalized
    /// spelling of the name was in the response either.
    #[error("header not found: {0}")]
    HeaderNotFound(String),

    /// A link href (or the URL passed to `discover`) could not be parsed or
    /// resolved against the current base location.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Network-level failure surfaced unmodified from the transport
    /// (connection refused, timeout, TLS failure).
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for HalError {
    fn from(err: reqwest::Error) -> Self {
        HalError::Transport(err.to_string())
    }
}
