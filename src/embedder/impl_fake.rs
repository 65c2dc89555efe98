use crate::device_camera::interface::Frame;
use crate::embedder::interface::Embedder;
use std::sync::Mutex;

/// Returns a fixed vector, or fails while `set_failing(true)`.
pub struct EmbedderFake {
    vector: Mutex<Vec<f32>>,
    failing: Mutex<bool>,
}

impl EmbedderFake {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector: Mutex::new(vector),
            failing: Mutex::new(false),
        }
    }

    pub fn set_vector(&self, vector: Vec<f32>) {
        *self.vector.lock().unwrap() = vector;
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

impl Embedder for EmbedderFake {
    fn embed(&self, _frame: &Frame) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        if *self.failing.lock().unwrap() {
            return Err("embedding failed".into());
        }
        Ok(self.vector.lock().unwrap().clone())
    }
}
