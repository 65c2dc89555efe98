use crate::classifier::impl_knn::ClassifierKnn;
use crate::classifier::interface::Classifier;
use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::embedder::impl_fake::EmbedderFake;
use crate::library::logger::impl_fake::LoggerFake;
use crate::sampling_loop::core::Event;
use crate::sampling_loop::main::SamplingLoop;
use crate::telemetry::impl_fake::TelemetrySinkFake;
use crate::ticker::impl_manual::TickerManual;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const DIMENSION: usize = 2;

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: LoggerFake,
    pub device_camera: Arc<DeviceCameraFake>,
    pub embedder: Arc<EmbedderFake>,
    pub device_display: DeviceDisplayFake,
    pub telemetry: Arc<TelemetrySinkFake>,
    pub ticker: Arc<TickerManual>,
    pub sampling_loop: SamplingLoop,
}

impl Fixture {
    pub fn new() -> Self {
        let config = Self::config();
        let classifier = Box::new(ClassifierKnn::new(config.num_classes, DIMENSION));
        Self::with(config, classifier, TelemetrySinkFake::new())
    }

    pub fn config() -> Config {
        Config {
            embedding_dimension: DIMENSION,
            frame_width: 2,
            frame_height: 2,
            ..Config::default()
        }
    }

    pub fn with(
        config: Config,
        classifier: Box<dyn Classifier + Send>,
        telemetry: TelemetrySinkFake,
    ) -> Self {
        let logger = LoggerFake::new();
        let device_camera = Arc::new(DeviceCameraFake::new(
            Arc::new(logger.clone()),
            config.frame_width,
            config.frame_height,
        ));
        let embedder = Arc::new(EmbedderFake::new(vec![1.0, 0.0]));
        let device_display = DeviceDisplayFake::new();
        let telemetry = Arc::new(telemetry);
        let ticker = Arc::new(TickerManual::new());

        let sampling_loop = SamplingLoop::new(
            config.clone(),
            Arc::new(logger.clone()),
            device_camera.clone(),
            embedder.clone(),
            classifier,
            Arc::new(Mutex::new(device_display.clone())),
            telemetry.clone(),
            ticker.clone(),
        );

        Self {
            config,
            logger,
            device_camera,
            embedder,
            device_display,
            telemetry,
            ticker,
            sampling_loop,
        }
    }

    /// Fires the ticker and processes whatever it queued.
    pub fn tick(&mut self) {
        self.ticker.fire();
        self.sampling_loop.handle_pending();
    }

    pub fn ticks(&mut self, count: usize) {
        for _ in 0..count {
            self.tick();
        }
    }

    pub fn send(&mut self, event: Event) {
        self.sampling_loop.handle(event);
    }

    pub fn train(&mut self, class: usize, label: &str) {
        self.send(Event::TrainPressed {
            class,
            label: Some(label.to_string()),
        });
    }

    /// Telemetry is sent from a worker thread; wait until `count` sends were seen.
    pub fn wait_for_sent(&self, count: usize) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if self.telemetry.sent().len() >= count {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }
}
