use thiserror::Error;

/// Outcome classification for every backend call.
///
/// `Unauthorized` is the 401 refinement of `Http`: callers use it to trigger
/// re-authentication instead of just showing the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// No response at all (connectivity, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Status 401 - the token is missing or expired.
    #[error("{0}")]
    Unauthorized(String),
}

impl RequestError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestError::Unauthorized(_))
    }

    /// Build the error for a failed HTTP status, taking `message` from the
    /// response body when it parses, falling back to a generic string.
    pub fn from_status(status: u16, body: Option<&str>) -> Self {
        let message = body
            .and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        if status == 401 {
            RequestError::Unauthorized(message)
        } else {
            RequestError::Http { status, message }
        }
    }
}
