use crate::classifier::interface::Classifier;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::embedder::interface::Embedder;
use crate::library::logger::interface::Logger;
use crate::sampling_loop::core::{init, transition, Effect, Event, State};
use crate::sampling_loop::render::Render;
use crate::sampling_loop::run_effect::RunEffect;
use crate::sampling_loop::tick::TickPipeline;
use crate::telemetry::interface::TelemetrySink;
use crate::telemetry::worker::TelemetryWorker;
use crate::ticker::interface::Ticker;
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Owns all loop state. Every event, including ticks, is handled to completion
/// on the thread that calls `run` or `handle`.
pub struct SamplingLoop {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    state: Option<State>,
    run_effect: RunEffect,
    render: Render,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
}

impl SamplingLoop {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        embedder: Arc<dyn Embedder + Send + Sync>,
        classifier: Box<dyn Classifier + Send>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        telemetry: Arc<dyn TelemetrySink>,
        ticker: Arc<dyn Ticker>,
    ) -> Self {
        let logger = logger.with_namespace("sampling_loop");
        let (event_sender, event_receiver) = channel();
        let render = Render::new(device_display);
        let pipeline = TickPipeline::new(config.top_k, device_camera.clone(), embedder, classifier);
        let telemetry = TelemetryWorker::spawn(
            telemetry,
            logger.with_namespace("telemetry"),
            config.telemetry.queue_capacity,
        );
        let run_effect = RunEffect::new(
            logger.clone(),
            device_camera,
            ticker,
            telemetry,
            render.clone(),
            pipeline,
            event_sender.clone(),
        );

        Self {
            config,
            logger,
            state: None,
            run_effect,
            render,
            event_sender,
            event_receiver,
        }
    }

    /// Handle for UI input: button presses, start/stop and shutdown.
    pub fn sender(&self) -> Sender<Event> {
        self.event_sender.clone()
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    #[cfg(test)]
    pub fn class_counts(&self) -> Vec<usize> {
        self.run_effect.class_counts()
    }

    /// Renders the initial view. Runs once; later calls are no-ops.
    pub fn init(&mut self) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.render.init() {
            let _ = self.logger.error(&format!("Failed to init display: {}", e));
        }
        let (state, effects) = init(&self.config);
        self.state = Some(state);
        self.run_effects(effects);
    }

    /// Processes one event and every synchronous follow-up it produces.
    pub fn handle(&mut self, event: Event) {
        self.init();

        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            if matches!(event, Event::Tick) {
                self.run_effect.tick_received();
            }
            if !matches!(event, Event::Tick | Event::TickDone(_)) {
                let _ = self.logger.info(&format!("event: {:?}", event));
            }

            let Some(state) = self.state.take() else {
                return;
            };
            let (new_state, effects) = transition(&self.config, state, event);
            self.state = Some(new_state);

            queue.extend(self.run_effects(effects));
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Vec<Event> {
        effects
            .into_iter()
            .filter_map(|effect| self.run_effect.run_effect(effect))
            .collect()
    }

    /// Handles whatever is already queued without blocking.
    #[cfg(test)]
    pub fn handle_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Runs until `Event::Shutdown` arrives.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.init();

        loop {
            let event = self.event_receiver.recv()?;
            let shutdown = matches!(event, Event::Shutdown);
            self.handle(event);
            if shutdown {
                let _ = self.logger.info("Shut down");
                return Ok(());
            }
        }
    }
}
