use crate::device_camera::interface::Frame;
use crate::embedder::interface::Embedder;

/// Averages the frame's bytes into `dimension` equal buckets and L2-normalizes the result.
pub struct EmbedderDownsample {
    dimension: usize,
}

impl EmbedderDownsample {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Embedder for EmbedderDownsample {
    fn embed(&self, frame: &Frame) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        if frame.pixels.is_empty() {
            return Err("frame has no pixels".into());
        }
        if self.dimension == 0 {
            return Err("embedding dimension must be at least 1".into());
        }

        let len = frame.pixels.len();
        let mut embedding: Vec<f32> = (0..self.dimension)
            .map(|bucket| {
                let start = bucket * len / self.dimension;
                let end = ((bucket + 1) * len / self.dimension).max(start + 1).min(len);
                let slice = &frame.pixels[start.min(len - 1)..end];
                slice.iter().map(|b| *b as f32).sum::<f32>() / slice.len() as f32
            })
            .collect();

        let norm = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in embedding.iter_mut() {
                *value /= norm;
            }
        }

        Ok(embedding)
    }
}
