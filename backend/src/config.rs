//! Environment-driven settings for the upstream IR API.

use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8100";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Reads `IR_API_BASE_URL` and `IR_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("IR_API_BASE_URL").ok(),
            std::env::var("IR_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL.to_string());
        let timeout_secs = match timeout_secs.as_deref().map(str::trim) {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!("ignoring invalid IR_API_TIMEOUT_SECS={raw:?}");
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };
        Self { base_url, timeout: Duration::from_secs(timeout_secs) }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8100");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn trailing_slash_and_timeout() {
        let config = ApiConfig::from_values(Some("http://10.0.0.5:8000/".into()), Some(" 30 ".into()));
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.url("/api/kpi"), "http://10.0.0.5:8000/api/kpi");
        assert_eq!(config.url("meta"), "http://10.0.0.5:8000/meta");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = ApiConfig::from_values(Some("  ".into()), Some("soon".into()));
        assert_eq!(config, ApiConfig::default());
    }
}
