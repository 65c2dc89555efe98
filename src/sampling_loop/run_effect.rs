use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use crate::sampling_loop::core::{Effect, Event};
use crate::sampling_loop::render::Render;
use crate::sampling_loop::tick::TickPipeline;
use crate::telemetry::worker::TelemetryWorker;
use crate::ticker::interface::Ticker;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    ticker: Arc<dyn Ticker>,
    telemetry: TelemetryWorker,
    render: Render,
    pipeline: TickPipeline,
    event_sender: Sender<Event>,
    tick_pending: Arc<AtomicBool>,
}

impl RunEffect {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        ticker: Arc<dyn Ticker>,
        telemetry: TelemetryWorker,
        render: Render,
        pipeline: TickPipeline,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger,
            device_camera,
            ticker,
            telemetry,
            render,
            pipeline,
            event_sender,
            tick_pending: Arc::new(AtomicBool::new(false)),
        }
    }

    #[cfg(test)]
    pub fn class_counts(&self) -> Vec<usize> {
        self.pipeline.class_counts()
    }

    /// Called when a queued tick is picked up, so the ticker may queue the next one.
    pub fn tick_received(&self) {
        self.tick_pending.store(false, Ordering::SeqCst);
    }

    /// Runs one effect on the loop thread. Synchronous effects hand back their
    /// follow-up event so the caller can process it before anything else.
    pub fn run_effect(&mut self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::PlayCamera => {
                if let Err(e) = self.device_camera.play() {
                    let _ = self.logger.error(&format!("Failed to play camera: {}", e));
                }
                None
            }
            Effect::PauseCamera => {
                if let Err(e) = self.device_camera.pause() {
                    let _ = self.logger.error(&format!("Failed to pause camera: {}", e));
                }
                None
            }
            Effect::StartTicker => {
                let message = if self.ticker.is_running() {
                    "Restarting ticks"
                } else {
                    "Starting ticks"
                };
                let _ = self.logger.info(message);
                let sender = self.event_sender.clone();
                let tick_pending = self.tick_pending.clone();
                tick_pending.store(false, Ordering::SeqCst);
                self.ticker.start(Box::new(move || {
                    // Coalesce: skip while the previous tick is still queued.
                    if tick_pending.swap(true, Ordering::SeqCst) {
                        return;
                    }
                    if sender.send(Event::Tick).is_err() {
                        tick_pending.store(false, Ordering::SeqCst);
                    }
                }));
                None
            }
            Effect::StopTicker => {
                let _ = self.logger.info("Stopping ticks");
                self.ticker.stop();
                None
            }
            Effect::RunTick { training_target } => {
                let outcome = self.pipeline.run(training_target);
                for failure in &outcome.failures {
                    let _ = self.logger.error(&format!("Tick failed: {}", failure));
                }
                Some(Event::TickDone(outcome))
            }
            Effect::Render(view) => {
                if let Err(e) = self.render.render(&view) {
                    let _ = self.logger.error(&format!("Failed to render: {}", e));
                }
                None
            }
            Effect::Report(event) => {
                self.telemetry.submit(event);
                None
            }
        }
    }
}
