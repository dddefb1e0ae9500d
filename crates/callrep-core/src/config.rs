use crate::app_config::{AppConfig, DEFAULT_FIVE_CALLS_BASE_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    // A blank key in `.env` means "not configured", same as leaving it out.
    let five_calls_api_key = lookup("FIVE_CALLS_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    if five_calls_api_key.is_none() {
        tracing::debug!("FIVE_CALLS_API_KEY not set; representative lookups are disabled");
    }

    let five_calls_base_url = non_empty("FIVE_CALLS_API_BASE", DEFAULT_FIVE_CALLS_BASE_URL)?;
    let log_level = non_empty("CALLREP_LOG_LEVEL", "info")?;
    let user_agent = non_empty("CALLREP_USER_AGENT", DEFAULT_USER_AGENT)?;

    Ok(AppConfig {
        log_level,
        five_calls_api_key,
        five_calls_base_url,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
