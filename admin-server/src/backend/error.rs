//! Booking backend error types.

/// Errors that can occur when talking to the booking backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Admin session is missing or has expired
    #[error("unauthorized: admin session missing or expired")]
    Unauthorized,

    /// Backend returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, for diagnostics.
        body: Option<String>,
    },

    /// Backend answered `ok: false` inside a 2xx response
    #[error("request rejected: {0}")]
    Rejected(String),
}
