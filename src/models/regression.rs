//! Linear and logistic rating models.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Pre-trained linear regression artifact for the continuous rating.
///
/// Operates on the selector's output columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// Artifact schema version
    pub schema_version: u32,
    /// Coefficient per selected feature column
    pub coefficients: Vec<f64>,
    /// Model intercept
    pub intercept: f64,
}

impl LinearRegressor {
    /// Number of feature columns the model expects.
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict a continuous rating for a selected feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            bail!(
                "feature vector has {} columns, regression model expects {}",
                features.len(),
                self.coefficients.len()
            );
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(coef, value)| coef * value)
            .sum();

        Ok(dot + self.intercept)
    }
}

/// Pre-trained multinomial logistic classifier artifact for the rating bucket.
///
/// One coefficient row and intercept per class; class k is the k-th rating
/// bucket. Operates on the full vectorizer output, not the selected columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingClassifier {
    /// Artifact schema version
    pub schema_version: u32,
    /// Coefficient row per class
    pub coefficients: Vec<Vec<f64>>,
    /// Intercept per class
    pub intercepts: Vec<f64>,
}

impl RatingClassifier {
    /// Number of classes the model scores.
    pub fn class_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of feature columns the model expects.
    pub fn dimension(&self) -> usize {
        self.coefficients.first().map(|row| row.len()).unwrap_or(0)
    }

    /// Check that the class rows are consistent.
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            bail!("classifier has no coefficient rows");
        }
        if self.intercepts.len() != self.coefficients.len() {
            bail!(
                "classifier has {} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            );
        }
        let dimension = self.dimension();
        for (class, row) in self.coefficients.iter().enumerate() {
            if row.len() != dimension {
                bail!(
                    "classifier class {} has {} coefficients, expected {}",
                    class,
                    row.len(),
                    dimension
                );
            }
        }
        Ok(())
    }

    /// Decision score per class for a feature vector.
    pub fn decision_scores(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.dimension() {
            bail!(
                "feature vector has {} columns, classifier expects {}",
                features.len(),
                self.dimension()
            );
        }

        let scores = self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .map(|(row, intercept)| {
                let dot: f64 = row
                    .iter()
                    .zip(features.iter())
                    .map(|(coef, value)| coef * value)
                    .sum();
                dot + intercept
            })
            .collect();

        Ok(scores)
    }

    /// Predict the class index with the highest decision score.
    ///
    /// Ties resolve to the lowest class index.
    pub fn predict(&self, features: &[f64]) -> Result<usize> {
        let scores = self.decision_scores(features)?;

        let mut best_class = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_class = class;
                best_score = score;
            }
        }

        Ok(best_class)
    }
}
