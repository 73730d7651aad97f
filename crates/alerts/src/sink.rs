use thiserror::Error;

use crate::envelope::{AlertEnvelope, AlertSeverity};

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("sink configuration invalid: {0}")]
    Config(String),

    #[error("alert delivery failed: {0}")]
    Delivery(String),
}

/// Outbound notification collaborator.
///
/// Delivery is best-effort: a failed sink must not poison the computation
/// that raised the alert, and callers are free to ignore the result.
pub trait AlertSink: Send + Sync {
    fn deliver(&self, alert: &AlertEnvelope) -> Result<(), AlertError>;
}

/// Sink that emits alerts into the process log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn deliver(&self, alert: &AlertEnvelope) -> Result<(), AlertError> {
        match alert.severity() {
            AlertSeverity::Info => tracing::info!(
                alert_id = %alert.alert_id(),
                subject = alert.subject(),
                "{}",
                alert.body()
            ),
            AlertSeverity::Warning => tracing::warn!(
                alert_id = %alert.alert_id(),
                subject = alert.subject(),
                "{}",
                alert.body()
            ),
            AlertSeverity::Critical => tracing::error!(
                alert_id = %alert.alert_id(),
                subject = alert.subject(),
                "{}",
                alert.body()
            ),
        }
        Ok(())
    }
}

/// Fan-out sink: hands each alert to every registered sink.
///
/// A failing sink is logged and skipped so the remaining sinks still
/// receive the alert. Only when every sink fails does the composite report
/// an error, and even that is advisory under the best-effort contract.
#[derive(Default)]
pub struct CompositeAlertSink {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl CompositeAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: impl AlertSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl AlertSink for CompositeAlertSink {
    fn deliver(&self, alert: &AlertEnvelope) -> Result<(), AlertError> {
        let mut failures = 0;
        for sink in &self.sinks {
            if let Err(err) = sink.deliver(alert) {
                failures += 1;
                tracing::warn!(
                    alert_id = %alert.alert_id(),
                    error = %err,
                    "alert sink failed; continuing with remaining sinks"
                );
            }
        }

        if failures > 0 && failures == self.sinks.len() {
            return Err(AlertError::Delivery(format!(
                "all {failures} sink(s) failed"
            )));
        }
        Ok(())
    }
}
