use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Payload keyed by the matched class label: `{ "<label>": "<label>" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEvent {
    pub label: String,
}

impl Serialize for ReportEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.label)?;
        map.end()
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
}

pub trait TelemetrySink: Send + Sync {
    /// Blocks until the send finishes. Callers that must not wait run it on their own thread.
    fn send(&self, event: &ReportEvent) -> Result<(), TelemetryError>;
}
