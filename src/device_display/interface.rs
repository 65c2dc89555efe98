use crate::sampling_loop::view::View;
use std::error::Error;

/// Shows the per-class status rows: label, example count, confidence, selection.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
}
