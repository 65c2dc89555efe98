use crate::library::logger::interface::Logger;
use crate::telemetry::interface::{ReportEvent, TelemetrySink};
use std::sync::mpsc::{sync_channel, SyncSender, TrySendError};
use std::sync::Arc;

/// Sends reports from one background thread. Reports that arrive while the
/// queue is full are dropped, so a slow endpoint never blocks the caller.
pub struct TelemetryWorker {
    queue: SyncSender<ReportEvent>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl TelemetryWorker {
    pub fn spawn(
        sink: Arc<dyn TelemetrySink>,
        logger: Arc<dyn Logger + Send + Sync>,
        capacity: usize,
    ) -> Self {
        let (queue, receiver) = sync_channel::<ReportEvent>(capacity);

        let worker_logger = logger.clone();
        std::thread::spawn(move || {
            // Ends once every sender is dropped.
            for event in receiver {
                if let Err(e) = sink.send(&event) {
                    let _ = worker_logger.error(&format!(
                        "Failed to send report for {:?}: {}",
                        event.label, e
                    ));
                }
            }
        });

        Self { queue, logger }
    }

    /// Returns false when the report was dropped.
    pub fn submit(&self, event: ReportEvent) -> bool {
        match self.queue.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                let _ = self.logger.error(&format!(
                    "Dropped report for {:?}: telemetry queue is full",
                    event.label
                ));
                false
            }
            Err(TrySendError::Disconnected(event)) => {
                let _ = self.logger.error(&format!(
                    "Dropped report for {:?}: telemetry worker stopped",
                    event.label
                ));
                false
            }
        }
    }
}

#[cfg(test)]
mod worker_test {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;
    use crate::telemetry::impl_fake::TelemetrySinkFake;
    use crate::telemetry::interface::TelemetryError;
    use std::sync::mpsc::{channel, Receiver, Sender};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Holds every send until `release` lets one through.
    struct SinkHanging {
        entered: Mutex<Sender<String>>,
        release: Mutex<Receiver<()>>,
    }

    impl TelemetrySink for SinkHanging {
        fn send(&self, event: &ReportEvent) -> Result<(), TelemetryError> {
            let _ = self.entered.lock().unwrap().send(event.label.clone());
            let _ = self.release.lock().unwrap().recv();
            Ok(())
        }
    }

    fn report(label: &str) -> ReportEvent {
        ReportEvent {
            label: label.to_string(),
        }
    }

    #[test]
    fn test_sends_in_order() {
        let sink = Arc::new(TelemetrySinkFake::new());
        let worker = TelemetryWorker::spawn(sink.clone(), Arc::new(LoggerFake::new()), 4);

        assert!(worker.submit(report("Cat")));
        assert!(worker.submit(report("Dog")));

        let deadline = Instant::now() + Duration::from_secs(5);
        while sink.sent().len() < 2 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(sink.sent(), vec![report("Cat"), report("Dog")]);
    }

    #[test]
    fn test_full_queue_drops_instead_of_blocking() {
        let (entered_sender, entered) = channel();
        let (release, release_receiver) = channel();
        let sink = Arc::new(SinkHanging {
            entered: Mutex::new(entered_sender),
            release: Mutex::new(release_receiver),
        });
        let logger = LoggerFake::new();
        let worker = TelemetryWorker::spawn(sink, Arc::new(logger.clone()), 1);

        assert!(worker.submit(report("first")));
        assert_eq!(
            entered.recv_timeout(Duration::from_secs(5)).unwrap(),
            "first"
        );

        // One send is in flight and one waits in the queue.
        assert!(worker.submit(report("second")));
        assert!(!worker.submit(report("third")));
        assert!(logger
            .errors()
            .iter()
            .any(|line| line.contains("\"third\"") && line.contains("queue is full")));

        release.send(()).unwrap();
        assert_eq!(
            entered.recv_timeout(Duration::from_secs(5)).unwrap(),
            "second"
        );
        release.send(()).unwrap();
        assert!(entered.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_failed_send_is_logged() {
        let sink = Arc::new(TelemetrySinkFake::failing());
        let logger = LoggerFake::new();
        let worker = TelemetryWorker::spawn(sink, Arc::new(logger.clone()), 4);

        assert!(worker.submit(report("Cat")));

        let deadline = Instant::now() + Duration::from_secs(5);
        while logger.errors().is_empty() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(logger.errors()[0].contains("Failed to send report for \"Cat\""));
    }
}
