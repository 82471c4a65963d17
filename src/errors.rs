//! Error types for image fetch operations

use thiserror::Error;

/// Errors that can occur while fetching a random image URL
#[derive(Error, Debug)]
pub enum FetchError {
    /// The keyed search API requires a credential and none was supplied.
    /// Raised before any network call is made.
    #[error("missing API credential for the {provider} provider")]
    MissingCredential {
        /// Name of the provider that required the credential
        provider: &'static str,
    },

    /// The API responded successfully but returned zero candidate images
    #[error("no images found for term '{term}'")]
    NoResults {
        /// The search term that produced no hits
        term: String,
    },

    /// The redirect endpoint answered without redirecting to an image
    #[error("request to '{url}' was not redirected to an image")]
    NoRedirect {
        /// The URL that was requested
        url: String,
    },

    /// The response body did not match the expected search-API shape
    #[error("failed to parse image search response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The service answered with a non-success HTTP status
    #[error("image request failed with status {status}: {body}")]
    ApiStatus {
        /// HTTP status code of the response
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The transport failed before a response was received
    #[error("image request failed: {0}")]
    Network(anyhow::Error),
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
