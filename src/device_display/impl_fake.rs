use crate::device_display::interface::DeviceDisplay;
use crate::sampling_loop::view::View;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every rendered view.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    views: Arc<Mutex<Vec<View>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<View> {
        self.views.lock().unwrap().clone()
    }

    pub fn last_view(&self) -> Option<View> {
        self.views.lock().unwrap().last().cloned()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.views.lock().unwrap().push(view.clone());
        Ok(())
    }
}
