use std::time::Duration;

use serde_json::{Value as JsonValue, json};

use crate::config::WebhookConfig;
use crate::envelope::AlertEnvelope;
use crate::sink::{AlertError, AlertSink};

/// Webhook sink: POSTs each alert as a JSON `{"text": ...}` payload to a
/// chat-style incoming webhook.
///
/// Failures are reported, never retried; retry policy belongs to whoever
/// composes the sinks.
pub struct WebhookAlertSink {
    config: WebhookConfig,
    client: reqwest::blocking::Client,
}

impl WebhookAlertSink {
    pub fn new(config: WebhookConfig) -> Result<Self, AlertError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AlertError::Config(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }
}

/// Payload shape expected by chat webhooks.
fn webhook_payload(alert: &AlertEnvelope) -> JsonValue {
    json!({ "text": format!("{}\n{}", alert.subject(), alert.body()) })
}

impl AlertSink for WebhookAlertSink {
    fn deliver(&self, alert: &AlertEnvelope) -> Result<(), AlertError> {
        let response = self
            .client
            .post(&self.config.url)
            .json(&webhook_payload(alert))
            .send()
            .map_err(|e| AlertError::Delivery(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AlertError::Delivery(format!(
                "webhook returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
