use crate::ticker::interface::{OnTick, Ticker};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Each `start` bumps the generation; a thread exits as soon as it sees a newer one.
pub struct TickerThread {
    period: Duration,
    generation: Arc<AtomicU64>,
    running: AtomicBool,
}

impl TickerThread {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            generation: Arc::new(AtomicU64::new(0)),
            running: AtomicBool::new(false),
        }
    }
}

impl Ticker for TickerThread {
    fn start(&self, on_tick: OnTick) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.running.store(true, Ordering::SeqCst);

        let current = self.generation.clone();
        let period = self.period;
        std::thread::spawn(move || loop {
            std::thread::sleep(period);
            if current.load(Ordering::SeqCst) != generation {
                break;
            }
            on_tick();
        });
    }

    fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.running.store(false, Ordering::SeqCst);
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
