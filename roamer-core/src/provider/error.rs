use thiserror::Error;

/// Errors from [`crate::EdgeProvider::route_edges`].
///
/// Callers that plan routes treat every variant as a reason to fall back to
/// estimated edges rather than as a failure of the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeProviderError {
    /// Fewer than two places were provided.
    #[error("at least two places are required to supply edges")]
    EmptyInput,
    /// The request never reached the service or the connection failed.
    #[error("network error calling {url}: {message}")]
    NetworkError {
        /// Endpoint that was called.
        url: String,
        /// Transport failure description.
        message: String,
    },
    /// The service did not answer in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was called.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },
    /// The service answered but reported a failure in its payload.
    #[error("routing service error {code}: {message}")]
    ServiceError {
        /// Service-specific status code.
        code: String,
        /// Human-readable reason.
        message: String,
    },
    /// The response body could not be understood.
    #[error("failed to parse routing response: {message}")]
    ParseError {
        /// Decoder failure description.
        message: String,
    },
    /// An edge failed validation.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        /// Edge origin.
        from: String,
        /// Edge destination.
        to: String,
        /// What was wrong with it.
        reason: String,
    },
}
