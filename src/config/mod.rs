//! Client settings.
//!
//! Nothing is persisted: every value comes from the defaults in
//! [`consts`](crate::consts) unless the command line overrides it.

use std::time::Duration;

use crate::consts::{
    DEFAULT_BASE_URL, DEFAULT_HIDE_DELAY, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TICK_INTERVAL,
    REVIEWS_PATH, SUMMARY_PATH,
};

/// Everything the orchestrator and HTTP client need to know.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub tick_interval: Duration,
    pub hide_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            hide_delay: DEFAULT_HIDE_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Use a different backend host. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn reviews_url(&self) -> String {
        format!("{}{}", self.base_url, REVIEWS_PATH)
    }

    pub fn summary_url(&self) -> String {
        format!("{}{}", self.base_url, SUMMARY_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_hosted_backend() {
        let config = ClientConfig::default();
        assert_eq!(
            config.reviews_url(),
            "https://profratingsbackend.onrender.com/api/reviews"
        );
        assert_eq!(
            config.summary_url(),
            "https://profratingsbackend.onrender.com/api/summary"
        );
    }

    #[test]
    fn default_timings() {
        let config = ClientConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(1250));
        assert_eq!(config.hide_delay, Duration::from_millis(500));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:5001/");
        assert_eq!(config.reviews_url(), "http://127.0.0.1:5001/api/reviews");
    }

    #[test]
    fn base_url_override_keeps_timings() {
        let config = ClientConfig {
            tick_interval: Duration::from_millis(10),
            ..ClientConfig::default()
        }
        .with_base_url("http://localhost:8080");
        assert_eq!(config.tick_interval, Duration::from_millis(10));
        assert_eq!(config.summary_url(), "http://localhost:8080/api/summary");
    }
}
