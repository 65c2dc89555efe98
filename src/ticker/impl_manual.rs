use crate::ticker::interface::{OnTick, Ticker};
use std::sync::Mutex;

/// Ticks only when `fire` is called.
#[derive(Default)]
pub struct TickerManual {
    on_tick: Mutex<Option<OnTick>>,
    starts: Mutex<usize>,
}

impl TickerManual {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when no subscription is active.
    pub fn fire(&self) -> bool {
        match self.on_tick.lock().unwrap().as_ref() {
            Some(on_tick) => {
                on_tick();
                true
            }
            None => false,
        }
    }

    pub fn starts(&self) -> usize {
        *self.starts.lock().unwrap()
    }
}

impl Ticker for TickerManual {
    fn start(&self, on_tick: OnTick) {
        *self.on_tick.lock().unwrap() = Some(on_tick);
        *self.starts.lock().unwrap() += 1;
    }

    fn stop(&self) {
        *self.on_tick.lock().unwrap() = None;
    }

    fn is_running(&self) -> bool {
        self.on_tick.lock().unwrap().is_some()
    }
}
