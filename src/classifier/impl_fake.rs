use crate::classifier::interface::{Classifier, ClassifierError, Prediction};
use crate::label_store::LabelStoreError;

/// Counts examples and answers every query with the scripted prediction.
pub struct ClassifierFake {
    counts: Vec<usize>,
    prediction: Result<Prediction, ClassifierError>,
}

impl ClassifierFake {
    pub fn new(num_classes: usize) -> Self {
        Self {
            counts: vec![0; num_classes],
            prediction: Err(ClassifierError::Empty),
        }
    }

    pub fn set_prediction(&mut self, prediction: Result<Prediction, ClassifierError>) {
        self.prediction = prediction;
    }
}

impl Classifier for ClassifierFake {
    fn add_example(&mut self, _vector: Vec<f32>, class: usize) -> Result<(), ClassifierError> {
        let num_classes = self.counts.len();
        match self.counts.get_mut(class) {
            Some(count) => {
                *count += 1;
                Ok(())
            }
            None => Err(LabelStoreError::ClassOutOfRange { class, num_classes }.into()),
        }
    }

    fn class_example_counts(&self) -> Vec<usize> {
        self.counts.clone()
    }

    fn num_classes(&self) -> usize {
        self.counts.iter().filter(|c| **c > 0).count()
    }

    fn predict(&self, _vector: &[f32], _k: usize) -> Result<Prediction, ClassifierError> {
        self.prediction.clone()
    }
}
