use crate::telemetry::interface::{ReportEvent, TelemetryError, TelemetrySink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct TelemetrySinkFake {
    sent: Mutex<Vec<ReportEvent>>,
    failing: AtomicBool,
}

impl TelemetrySinkFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let sink = Self::default();
        sink.failing.store(true, Ordering::SeqCst);
        sink
    }

    /// Every event passed to `send`, including the ones that failed.
    pub fn sent(&self) -> Vec<ReportEvent> {
        self.sent.lock().unwrap().clone()
    }
}

impl TelemetrySink for TelemetrySinkFake {
    fn send(&self, event: &ReportEvent) -> Result<(), TelemetryError> {
        self.sent.lock().unwrap().push(event.clone());
        if self.failing.load(Ordering::SeqCst) {
            return Err(TelemetryError::Status {
                code: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}
