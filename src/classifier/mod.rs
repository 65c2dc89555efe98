#[cfg(test)]
pub mod impl_fake;
pub mod impl_knn;
pub mod interface;
