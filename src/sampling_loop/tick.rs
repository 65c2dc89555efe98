use crate::classifier::interface::{Classifier, ClassifierError, Prediction};
use crate::device_camera::interface::DeviceCamera;
use crate::embedder::interface::Embedder;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickFailure {
    #[error("frame unavailable: {0}")]
    FrameUnavailable(String),
    #[error("invalid example: {0}")]
    InvalidExample(String),
    #[error("inference failed: {0}")]
    InferenceFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub frame_available: bool,
    /// Class that received a new example this tick.
    pub appended: Option<usize>,
    pub prediction: Option<Prediction>,
    pub class_counts: Vec<usize>,
    pub failures: Vec<TickFailure>,
}

/// Capture, embed, optionally train, optionally predict. Frame and embedding
/// are owned by `run` and dropped before it returns.
pub struct TickPipeline {
    top_k: usize,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    embedder: Arc<dyn Embedder + Send + Sync>,
    classifier: Box<dyn Classifier + Send>,
}

impl TickPipeline {
    pub fn new(
        top_k: usize,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        embedder: Arc<dyn Embedder + Send + Sync>,
        classifier: Box<dyn Classifier + Send>,
    ) -> Self {
        Self {
            top_k,
            device_camera,
            embedder,
            classifier,
        }
    }

    #[cfg(test)]
    pub fn class_counts(&self) -> Vec<usize> {
        self.classifier.class_example_counts()
    }

    pub fn run(&mut self, training_target: Option<usize>) -> TickOutcome {
        let mut outcome = TickOutcome {
            frame_available: false,
            appended: None,
            prediction: None,
            class_counts: Vec::new(),
            failures: Vec::new(),
        };

        if !self.device_camera.is_playing() {
            outcome
                .failures
                .push(TickFailure::FrameUnavailable("camera is not playing".to_string()));
            return outcome;
        }

        let frame = match self.device_camera.capture_frame() {
            Ok(frame) => frame,
            Err(e) => {
                outcome
                    .failures
                    .push(TickFailure::FrameUnavailable(e.to_string()));
                return outcome;
            }
        };
        outcome.frame_available = true;

        match self.embedder.embed(&frame) {
            Ok(embedding) => {
                if let Some(class) = training_target {
                    match self.classifier.add_example(embedding.clone(), class) {
                        Ok(()) => outcome.appended = Some(class),
                        Err(e) => outcome.failures.push(add_failure(e)),
                    }
                }

                if self.classifier.num_classes() > 0 {
                    match self.classifier.predict(&embedding, self.top_k) {
                        Ok(prediction) => outcome.prediction = Some(prediction),
                        Err(e) => outcome
                            .failures
                            .push(TickFailure::InferenceFailure(e.to_string())),
                    }
                }
            }
            Err(e) => outcome
                .failures
                .push(TickFailure::InferenceFailure(e.to_string())),
        }

        outcome.class_counts = self.classifier.class_example_counts();
        outcome
    }
}

fn add_failure(error: ClassifierError) -> TickFailure {
    match error {
        ClassifierError::InvalidExample(e) => TickFailure::InvalidExample(e.to_string()),
        e => TickFailure::InferenceFailure(e.to_string()),
    }
}
