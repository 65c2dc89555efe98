#[cfg(test)]
pub mod impl_fake;
pub mod impl_downsample;
pub mod interface;
