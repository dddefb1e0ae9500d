use thiserror::Error;

/// Errors returned by [`FiveCallsClient::lookup`](crate::FiveCallsClient::lookup).
#[derive(Debug, Error)]
pub enum LookupError {
    /// No API token is configured. Reported to the user, never retried.
    #[error("5 Calls API key not configured. Set FIVE_CALLS_API_KEY in your environment or .env file.")]
    MissingApiKey,

    /// The configured base URL could not be parsed.
    #[error("invalid 5 Calls base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The API answered with a non-200 status.
    #[error("Error fetching representatives: {status}{}", api_suffix(.message.as_deref()))]
    Api { status: u16, message: Option<String> },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 200 response whose body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

fn api_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(" (API Error: {m})")).unwrap_or_default()
}

impl LookupError {
    /// Whether this is a transport-level failure (network or unparseable body)
    /// rather than a configuration problem or an API-reported error.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Http(_) | LookupError::Deserialize { .. })
    }

    /// The API's own `error` message, if the response carried one.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            LookupError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
