/// Errors surfaced by [`crate::service::FlightService`] operations.
///
/// Failures absorbed by a fallback chain never reach this type; only the
/// fail-fast operations and request validation produce it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A required query argument was absent or empty.
    #[error("{message}")]
    MissingParameter {
        message: &'static str,
        /// Example request showing correct usage.
        example: &'static str,
    },

    /// A single-source operation's provider call failed.
    #[error("{context}: {details}")]
    Upstream {
        context: &'static str,
        details: String,
        /// Hint pointing the caller at an alternative, when one exists.
        fallback: Option<&'static str>,
    },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Failure of one provider call.
///
/// Provider adapters map their transport errors into this type so the
/// fallback chain can reason about failures without knowing the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider answered 2xx but reported an error in the body.
    #[error("provider error: {0}")]
    Api(String),

    /// The body could not be decoded as the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The call succeeded but matched no records.
    #[error("No flight data found")]
    NoData,

    /// The configured base URL cannot be extended with a request path.
    #[error("invalid provider url: {0}")]
    InvalidUrl(String),
}
