/// Production base URL for the 5 Calls API.
pub const DEFAULT_FIVE_CALLS_BASE_URL: &str = "https://api.5calls.org/v1";

pub const DEFAULT_USER_AGENT: &str = "callrep/0.1 (constituent-outreach)";

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub five_calls_api_key: Option<String>,
    pub five_calls_base_url: String,
    pub user_agent: String,
}

impl AppConfig {
    /// Whether representative lookups can be attempted at all.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.five_calls_api_key.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "five_calls_api_key",
                &self.five_calls_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("five_calls_base_url", &self.five_calls_base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
