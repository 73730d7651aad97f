use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How urgent an alert is. Sinks may route or filter on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// Envelope for one outbound alert, the unit handed to sinks.
///
/// The body is a fully rendered plain-text payload. Sinks deliver it as-is;
/// they must not re-interpret analytics results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEnvelope {
    alert_id: Uuid,
    occurred_at: DateTime<Utc>,
    severity: AlertSeverity,
    subject: String,
    body: String,
}

impl AlertEnvelope {
    pub fn new(severity: AlertSeverity, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            alert_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            severity,
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn alert_id(&self) -> Uuid {
        self.alert_id
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn severity(&self) -> AlertSeverity {
        self.severity
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
