//! Feature selection over encoded vectors.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Pre-trained feature selector artifact.
///
/// Holds the vectorizer columns the linear model was trained on, in the
/// order the model expects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSelector {
    /// Artifact schema version
    pub schema_version: u32,
    /// Dimension of the vectors this selector was fitted against
    pub input_dim: usize,
    /// Retained columns, in output order
    pub selected: Vec<usize>,
}

impl FeatureSelector {
    /// Number of columns kept by `transform`.
    pub fn output_dim(&self) -> usize {
        self.selected.len()
    }

    /// Check that every retained column exists in the input dimension.
    pub fn validate(&self) -> Result<()> {
        for &column in &self.selected {
            if column >= self.input_dim {
                bail!(
                    "selector retains column {} but input dimension is {}",
                    column,
                    self.input_dim
                );
            }
        }
        Ok(())
    }

    /// Reduce a feature vector to the retained columns.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.input_dim {
            bail!(
                "feature vector has {} columns, selector expects {}",
                features.len(),
                self.input_dim
            );
        }
        Ok(self.selected.iter().map(|&column| features[column]).collect())
    }
}
