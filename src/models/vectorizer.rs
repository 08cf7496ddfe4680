//! TF-IDF feature encoding over normalized text.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pre-trained TF-IDF vectorizer artifact.
///
/// `vocabulary` maps a term to its feature column, `idf` holds the per-column
/// inverse document frequency. Both come from the external training export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Artifact schema version
    pub schema_version: u32,
    /// Term to feature column mapping
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature column
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Number of feature columns produced by `transform`.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Check that every vocabulary entry has an IDF weight.
    pub fn validate(&self) -> Result<()> {
        for (term, &column) in &self.vocabulary {
            if column >= self.idf.len() {
                bail!(
                    "vocabulary term {:?} maps to column {} but only {} idf weights are present",
                    term,
                    column,
                    self.idf.len()
                );
            }
        }
        Ok(())
    }

    /// Encode a normalized document as an L2-normalized TF-IDF vector.
    ///
    /// Tokens are whitespace-separated. Out-of-vocabulary tokens are ignored;
    /// a document with no in-vocabulary tokens encodes to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.idf.len()];

        for token in document.split_whitespace() {
            if let Some(&column) = self.vocabulary.get(token) {
                features[column] += 1.0;
            }
        }

        for (value, &idf) in features.iter_mut().zip(self.idf.iter()) {
            *value *= idf;
        }

        let norm = features.iter().map(|value| value * value).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }
}
