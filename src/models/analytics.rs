use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single analytics datapoint emitted by the feed pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub value: String,
    /// When the event was recorded
    pub recorded_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Create an event stamped with the current time
    pub fn new(name: &str, value: String) -> Self {
        AnalyticsEvent {
            name: name.to_string(),
            value,
            recorded_at: Utc::now(),
        }
    }

    /// Wire format used by the log sink
    pub fn format(&self) -> String {
        format!("{}:{}", self.name, self.value)
    }
}

/// Analytics sink; events are dropped from the log when disabled
#[derive(Debug, Clone)]
pub struct Analytics {
    enabled: bool,
}

impl Analytics {
    pub fn new(enabled: bool) -> Self {
        Analytics { enabled }
    }

    /// Format the event and emit it when logging is enabled.
    ///
    /// Returns the formatted line either way so callers can assert on it.
    pub fn record(&self, event: &AnalyticsEvent) -> String {
        let line = event.format();
        if self.enabled {
            tracing::info!("analytics event: {}", line);
        }
        line
    }
}
