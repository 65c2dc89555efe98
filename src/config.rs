use crate::sampling_loop::report::ReportPolicy;
use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Reports waiting to be sent; newer ones are dropped while it is full.
    pub queue_capacity: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub num_classes: usize,
    pub top_k: usize,
    pub training_quota: usize,
    pub report_policy: ReportPolicy,
    pub tick_rate: Duration,
    pub frame_width: u32,
    pub frame_height: u32,
    pub embedding_dimension: usize,
    pub telemetry: TelemetryConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_classes: 3,
            top_k: 10,
            training_quota: 50,
            report_policy: ReportPolicy::ConfidenceThreshold {
                min_confidence: 0.6,
            },
            tick_rate: Duration::from_millis(33),
            frame_width: 350,
            frame_height: 350,
            embedding_dimension: 1024,
            telemetry: TelemetryConfig {
                endpoint: "http://127.0.0.1:8085/api/v1/telemetry".to_string(),
                connect_timeout: Duration::from_secs(5),
                request_timeout: Duration::from_secs(10),
                queue_capacity: 8,
            },
            logger_timezone: utc(),
        }
    }
}

impl Config {
    /// Overlays `TELEMETRY_ENDPOINT`, `REPORT_POLICY` and `TICK_RATE_MS` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup("TELEMETRY_ENDPOINT").filter(|e| !e.trim().is_empty()) {
            self.telemetry.endpoint = endpoint.trim().to_string();
        }

        match lookup("REPORT_POLICY").as_deref().map(str::trim) {
            Some("top") => self.report_policy = ReportPolicy::TopClass,
            Some("threshold") => {
                self.report_policy = ReportPolicy::ConfidenceThreshold {
                    min_confidence: 0.6,
                }
            }
            _ => {}
        }

        if let Some(millis) = lookup("TICK_RATE_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            if millis > 0 {
                self.tick_rate = Duration::from_millis(millis);
            }
        }

        self
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
