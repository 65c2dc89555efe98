#[cfg(test)]
pub mod impl_manual;
pub mod impl_thread;
pub mod interface;
