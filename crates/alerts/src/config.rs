use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    5
}

/// Webhook delivery settings, passed in at sink construction.
///
/// Alerts are fire-and-forget; the timeout stays short so a slow endpoint
/// cannot stall the caller for long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_absent_from_config_source() {
        let config: WebhookConfig =
            serde_json::from_str(r#"{"url": "https://hooks.example.com/T000/B000"}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
    }
}
