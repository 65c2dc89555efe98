use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelStoreError {
    #[error("class index {class} is out of range for {num_classes} classes")]
    ClassOutOfRange { class: usize, num_classes: usize },
    #[error("expected a vector of dimension {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("vector is empty")]
    EmptyVector,
    #[error("vector contains a non-finite value at position {position}")]
    NonFinite { position: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub vector: Vec<f32>,
    pub class: usize,
}

/// Append-only collection of labeled feature vectors.
#[derive(Debug, Clone)]
pub struct LabelStore {
    dimension: usize,
    examples: Vec<Example>,
    counts: Vec<usize>,
}

impl LabelStore {
    pub fn new(num_classes: usize, dimension: usize) -> Self {
        Self {
            dimension,
            examples: Vec::new(),
            counts: vec![0; num_classes],
        }
    }

    /// Validates before touching any state, so a rejected example leaves the store unchanged.
    pub fn add_example(&mut self, vector: Vec<f32>, class: usize) -> Result<(), LabelStoreError> {
        self.validate(&vector, class)?;
        self.examples.push(Example { vector, class });
        self.counts[class] += 1;
        Ok(())
    }

    pub fn validate(&self, vector: &[f32], class: usize) -> Result<(), LabelStoreError> {
        if class >= self.counts.len() {
            return Err(LabelStoreError::ClassOutOfRange {
                class,
                num_classes: self.counts.len(),
            });
        }
        if vector.is_empty() {
            return Err(LabelStoreError::EmptyVector);
        }
        if vector.len() != self.dimension {
            return Err(LabelStoreError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        if let Some(position) = vector.iter().position(|v| !v.is_finite()) {
            return Err(LabelStoreError::NonFinite { position });
        }
        Ok(())
    }

    pub fn class_counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of classes holding at least one example.
    pub fn total_classes(&self) -> usize {
        self.counts.iter().filter(|count| **count > 0).count()
    }

    pub fn num_classes(&self) -> usize {
        self.counts.len()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }
}
