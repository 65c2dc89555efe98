use classifier::impl_knn::ClassifierKnn;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::{DeviceDisplayGui, DisplayWindow};
use device_display::interface::DeviceDisplay;
use embedder::impl_downsample::EmbedderDownsample;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use sampling_loop::core::Event;
use sampling_loop::main::SamplingLoop;
use std::sync::{Arc, Mutex};
use telemetry::impl_http::TelemetrySinkHttp;
use ticker::impl_thread::TickerThread;

mod classifier;
mod commands;
mod config;
mod device_camera;
mod device_display;
mod embedder;
mod label_store;
mod library;
mod sampling_loop;
mod telemetry;
mod ticker;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default().with_env_overrides();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(
        logger.clone(),
        config.frame_width,
        config.frame_height,
    ));

    let embedder = Arc::new(EmbedderDownsample::new(config.embedding_dimension));

    let classifier = Box::new(ClassifierKnn::new(
        config.num_classes,
        config.embedding_dimension,
    ));

    let (device_display, window): (
        Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        Option<DisplayWindow>,
    ) = if std::env::args().any(|arg| arg == "--gui") {
        let device_display = DeviceDisplayGui::new();
        let window = device_display.window();
        (Arc::new(Mutex::new(device_display)), Some(window))
    } else {
        (Arc::new(Mutex::new(DeviceDisplayConsole::new())), None)
    };

    let telemetry = Arc::new(TelemetrySinkHttp::new(&config.telemetry));

    let ticker = Arc::new(TickerThread::new(config.tick_rate));

    let mut sampling_loop = SamplingLoop::new(
        config,
        logger.clone(),
        device_camera,
        embedder,
        classifier,
        device_display,
        telemetry,
        ticker,
    );

    let input_sender = sampling_loop.sender();
    let input_logger = logger.with_namespace("commands");
    std::thread::spawn(move || {
        commands::forward(std::io::stdin().lock(), input_sender, input_logger);
    });

    logger.info(commands::HELP)?;
    let event_sender = sampling_loop.sender();
    event_sender.send(Event::StartRequested)?;

    let Some(window) = window else {
        return sampling_loop.run();
    };

    // The window event loop has to own the main thread.
    let sampling_loop_thread = std::thread::spawn(move || sampling_loop.run());
    match window.run() {
        Ok(()) => {
            let _ = event_sender.send(Event::Shutdown);
        }
        Err(e) => logger.error(&format!("Failed to open window: {}", e))?,
    }

    sampling_loop_thread
        .join()
        .map_err(|_| "sampling loop thread panicked")?
}
