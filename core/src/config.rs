//! Client configuration, fixed once at process start.

use std::time::Duration;

/// Base address used when `--address` is not given.
pub const DEFAULT_ADDRESS: &str = "http://localhost:3000";

/// Upper bound on a single request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Immutable settings owned by one `HttpClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// JSON content type and the default timeout, bound to `base_url`.
    ///
    /// Trailing slashes are dropped so paths can always start with `/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_json_header_and_ten_second_timeout() {
        let config = ClientConfig::new(DEFAULT_ADDRESS);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(
            config.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/api/");
        assert_eq!(config.base_url, "http://localhost:3000/api");
    }
}
