use crate::device_display::interface::DeviceDisplay;
use crate::sampling_loop::view::View;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};

pub struct DisplayWindow {
    view: Arc<Mutex<Option<View>>>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self
            .view
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(view) = view else {
                ui.label("Waiting for camera...");
                return;
            };

            let header = if view.loop_active {
                "Detection running"
            } else {
                "Detection stopped"
            };
            ui.heading(header);
            ui.add_space(10.0);

            for (class, status) in view.classes.iter().enumerate() {
                let mut text = egui::RichText::new(format!(
                    "{}: {}",
                    status.label,
                    status.describe()
                ))
                .monospace()
                .size(18.0);
                if status.selected {
                    text = text.strong().color(egui::Color32::from_rgb(0, 120, 0));
                }
                if view.training == Some(class) {
                    text = text.background_color(egui::Color32::from_rgb(255, 240, 180));
                }
                ui.label(text);
            }
        });

        // Views arrive from the loop thread; keep repainting to pick them up.
        ctx.request_repaint_after(std::time::Duration::from_millis(50));
    }
}

/// Holds the latest view for a `DisplayWindow`. Rendering only swaps the
/// shared view, so it works from any thread.
#[derive(Default)]
pub struct DeviceDisplayGui {
    view: Arc<Mutex<Option<View>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self::default()
    }

    /// The window showing this display's views.
    pub fn window(&self) -> DisplayWindow {
        DisplayWindow {
            view: self.view.clone(),
        }
    }
}

impl DisplayWindow {
    /// Blocks until the window is closed. Must be called on the main thread.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 220.0])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native("teachable-cam", options, Box::new(move |_cc| Box::new(self)))
            .map_err(|e| e.to_string().into())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut current = self
            .view
            .lock()
            .map_err(|_| "display state lock poisoned")?;
        *current = None;
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut current = self
            .view
            .lock()
            .map_err(|_| "display state lock poisoned")?;
        *current = Some(view.clone());
        Ok(())
    }
}
