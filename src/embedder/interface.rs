use crate::device_camera::interface::Frame;

pub trait Embedder: Send + Sync {
    fn embed(&self, frame: &Frame) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
