pub type OnTick = Box<dyn Fn() + Send + 'static>;

/// Recurring tick source with explicit start and stop.
pub trait Ticker: Send + Sync {
    /// Starts delivering ticks to `on_tick`, replacing any previous subscription.
    fn start(&self, on_tick: OnTick);
    fn stop(&self);
    fn is_running(&self) -> bool;
}
