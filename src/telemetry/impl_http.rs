use crate::config::TelemetryConfig;
use crate::telemetry::interface::{ReportEvent, TelemetryError, TelemetrySink};

const MAX_ERROR_BODY_CHARS: usize = 512;

pub struct TelemetrySinkHttp {
    endpoint: String,
    agent: ureq::Agent,
}

impl TelemetrySinkHttp {
    pub fn new(config: &TelemetryConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout(config.request_timeout)
            .build();

        Self {
            endpoint: config.endpoint.clone(),
            agent,
        }
    }
}

impl TelemetrySink for TelemetrySinkHttp {
    fn send(&self, event: &ReportEvent) -> Result<(), TelemetryError> {
        let request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json");

        match request.send_json(event) {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, response)) => {
                let body: String = response
                    .into_string()
                    .unwrap_or_default()
                    .chars()
                    .take(MAX_ERROR_BODY_CHARS)
                    .collect();
                Err(TelemetryError::Status { code, body })
            }
            Err(ureq::Error::Transport(err)) => Err(TelemetryError::Transport(err.to_string())),
        }
    }
}
