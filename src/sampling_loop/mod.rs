pub mod core;
pub mod main;
pub mod render;
pub mod report;
pub mod run_effect;
#[cfg(test)]
mod tests;
pub mod tick;
pub mod view;
