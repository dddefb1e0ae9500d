//! HTTP client for the 5 Calls representatives endpoint.
//!
//! Wraps `reqwest` with token handling, query construction and typed response
//! decoding. Every call is a fresh request: there is no cache, no retry and no
//! request timeout beyond what the transport imposes.

use callrep_core::app_config::{AppConfig, DEFAULT_FIVE_CALLS_BASE_URL, DEFAULT_USER_AGENT};
use reqwest::{Client, StatusCode, Url};

use crate::error::LookupError;
use crate::types::{ErrorResponse, LookupOutcome, RepresentativesResponse};

const TOKEN_HEADER: &str = "X-5Calls-Token";

/// Only federal legislators are requested.
const FEDERAL_AREAS: &str = "US House,US Senate";

/// Client for the 5 Calls API.
///
/// Use [`FiveCallsClient::new`] for production, [`FiveCallsClient::from_config`]
/// to build from [`AppConfig`], or [`FiveCallsClient::with_base_url`] to point
/// at a mock server in tests.
pub struct FiveCallsClient {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl FiveCallsClient {
    /// Creates a client pointed at the production 5 Calls API.
    ///
    /// A missing `api_key` is accepted here; [`lookup`](Self::lookup) reports
    /// it as [`LookupError::MissingApiKey`].
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: Option<&str>) -> Result<Self, LookupError> {
        Self::with_base_url(api_key, DEFAULT_USER_AGENT, DEFAULT_FIVE_CALLS_BASE_URL)
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`FiveCallsClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        Self::with_base_url(
            config.five_calls_api_key.as_deref(),
            &config.user_agent,
            &config.five_calls_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, LookupError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        // Exactly one trailing slash so joining "representatives" appends a
        // segment instead of replacing the last one (".../v1" -> ".../v1/...").
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("representatives"))
            .map_err(|e| LookupError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
            endpoint,
        })
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Looks up the federal legislators for a ZIP code (or any location string
    /// the API accepts).
    ///
    /// A `lowAccuracy` response still succeeds; the outcome carries
    /// [`LookupWarning::LowAccuracy`](crate::LookupWarning::LowAccuracy).
    ///
    /// # Errors
    ///
    /// - [`LookupError::MissingApiKey`] if no token is configured (no request
    ///   is sent).
    /// - [`LookupError::Api`] on any non-200 status, carrying the body's
    ///   `error` message when present.
    /// - [`LookupError::Http`] on network failure.
    /// - [`LookupError::Deserialize`] if a 200 body is not the expected shape.
    pub async fn lookup(&self, zip_code: &str) -> Result<LookupOutcome, LookupError> {
        let api_key = self.api_key.as_deref().ok_or(LookupError::MissingApiKey)?;

        let url = self.build_url(zip_code);
        tracing::debug!(zip = %zip_code, "fetching representatives");

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            let message = Self::error_message(&body);
            tracing::warn!(
                zip = %zip_code,
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "representatives lookup rejected"
            );
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: RepresentativesResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
                context: format!("representatives(location={zip_code})"),
                source: e,
            })?;

        if parsed.low_accuracy {
            tracing::warn!(zip = %zip_code, "low accuracy match; ZIP may span multiple districts");
        }
        tracing::info!(
            zip = %zip_code,
            count = parsed.representatives.len(),
            "representatives loaded"
        );

        Ok(parsed.into())
    }

    /// Builds `{base}/representatives?location=..&areas=..` with
    /// percent-encoded query values.
    fn build_url(&self, zip_code: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("location", zip_code)
            .append_pair("areas", FEDERAL_AREAS);
        url
    }

    /// Extracts the `error` string from a failure body. Bodies that are empty
    /// or not JSON yield `None`.
    fn error_message(body: &str) -> Option<String> {
        if body.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => parsed.error.filter(|e| !e.is_empty()),
            Err(e) => {
                tracing::debug!(error = %e, "error body is not JSON");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
