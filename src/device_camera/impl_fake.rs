use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub struct DeviceCameraFake {
    playing: AtomicBool,
    width: u32,
    height: u32,
    started_at: Instant,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, width: u32, height: u32) -> Self {
        Self {
            playing: AtomicBool::new(false),
            width,
            height,
            started_at: Instant::now(),
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }

    /// Brightness swings slowly so different moments look like different scenes.
    fn base_brightness(&self) -> f32 {
        let seconds = self.started_at.elapsed().as_secs_f32();
        127.0 + 100.0 * (seconds / 5.0).sin()
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn play(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.playing.store(true, Ordering::SeqCst);
        self.logger.info("Camera playing")?;
        Ok(())
    }

    fn pause(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.playing.store(false, Ordering::SeqCst);
        self.logger.info("Camera paused")?;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn capture_frame(&self) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        if !self.is_playing() {
            return Err("camera is not playing".into());
        }

        let base = self.base_brightness();
        let mut rng = rand::rng();
        let len = self.width as usize * self.height as usize * 3;
        let pixels = (0..len)
            .map(|_| (base + rng.random_range(-20.0..20.0)).clamp(0.0, 255.0) as u8)
            .collect();

        Ok(Frame {
            width: self.width,
            height: self.height,
            pixels,
        })
    }
}
