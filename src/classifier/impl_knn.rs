use crate::classifier::interface::{Classifier, ClassifierError, Prediction};
use crate::label_store::LabelStore;
use std::cmp::Ordering;

/// Brute-force k-nearest-neighbour classifier over cosine similarity.
pub struct ClassifierKnn {
    store: LabelStore,
}

impl ClassifierKnn {
    pub fn new(num_classes: usize, dimension: usize) -> Self {
        Self {
            store: LabelStore::new(num_classes, dimension),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &LabelStore {
        &self.store
    }
}

impl Classifier for ClassifierKnn {
    fn add_example(&mut self, vector: Vec<f32>, class: usize) -> Result<(), ClassifierError> {
        self.store.add_example(vector, class)?;
        Ok(())
    }

    fn class_example_counts(&self) -> Vec<usize> {
        self.store.class_counts().to_vec()
    }

    fn num_classes(&self) -> usize {
        self.store.total_classes()
    }

    fn predict(&self, vector: &[f32], k: usize) -> Result<Prediction, ClassifierError> {
        if k == 0 {
            return Err(ClassifierError::InvalidK);
        }
        if self.store.is_empty() {
            return Err(ClassifierError::Empty);
        }
        if vector.len() != self.store.dimension() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.store.dimension(),
                actual: vector.len(),
            });
        }

        let query_norm = norm(vector);
        let mut neighbours: Vec<(f32, usize)> = self
            .store
            .examples()
            .map(|example| {
                (
                    cosine_similarity(vector, query_norm, &example.vector),
                    example.class,
                )
            })
            .collect();

        let k = k.min(neighbours.len());
        neighbours.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        neighbours.truncate(k);

        let num_classes = self.store.num_classes();
        let mut votes = vec![0usize; num_classes];
        let mut similarity_sums = vec![0f32; num_classes];
        for (similarity, class) in &neighbours {
            votes[*class] += 1;
            similarity_sums[*class] += similarity;
        }

        // Most votes wins; ties go to the larger summed similarity, then the lower index.
        let mut class_index = 0;
        for class in 1..num_classes {
            let better_votes = votes[class] > votes[class_index];
            let tied_but_closer = votes[class] == votes[class_index]
                && similarity_sums[class] > similarity_sums[class_index];
            if better_votes || tied_but_closer {
                class_index = class;
            }
        }

        let confidences = votes
            .iter()
            .map(|count| *count as f32 / k as f32)
            .collect();

        Ok(Prediction {
            class_index,
            confidences,
        })
    }
}

fn norm(vector: &[f32]) -> f32 {
    vector.iter().map(|v| v * v).sum::<f32>().sqrt()
}

fn cosine_similarity(query: &[f32], query_norm: f32, other: &[f32]) -> f32 {
    let denominator = query_norm * norm(other);
    if denominator == 0.0 {
        return 0.0;
    }
    let dot: f32 = query.iter().zip(other).map(|(a, b)| a * b).sum();
    dot / denominator
}
