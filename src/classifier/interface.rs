use crate::label_store::LabelStoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class_index: usize,
    /// One score per class. Not assumed to be normalized.
    pub confidences: Vec<f32>,
}

impl Prediction {
    pub fn confidence_of(&self, class: usize) -> Option<f32> {
        self.confidences.get(class).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error(transparent)]
    InvalidExample(#[from] LabelStoreError),
    #[error("no examples have been added")]
    Empty,
    #[error("k must be at least 1")]
    InvalidK,
    #[error("query has dimension {actual}, examples have dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub trait Classifier: Send {
    fn add_example(&mut self, vector: Vec<f32>, class: usize) -> Result<(), ClassifierError>;
    fn class_example_counts(&self) -> Vec<usize>;
    /// Number of classes with at least one example.
    fn num_classes(&self) -> usize;
    fn predict(&self, vector: &[f32], k: usize) -> Result<Prediction, ClassifierError>;
}
