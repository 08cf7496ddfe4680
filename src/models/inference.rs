//! Inference engine combining the four rating model artifacts

use crate::config::AppConfig;
use crate::models::loader::{ArtifactLoader, LoadedArtifacts};
use crate::models::regression::{LinearRegressor, RatingClassifier};
use crate::models::selector::FeatureSelector;
use crate::models::vectorizer::TfidfVectorizer;
use crate::types::rating::RatingPrediction;
use anyhow::{Context, Result};
use tracing::debug;

/// Inference engine running both rating predictors over normalized text.
pub struct InferenceEngine {
    vectorizer: TfidfVectorizer,
    selector: FeatureSelector,
    regressor: LinearRegressor,
    classifier: RatingClassifier,
}

impl InferenceEngine {
    /// Create an inference engine from configuration, loading all artifacts.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let artifacts = ArtifactLoader::new(&config.models.models_dir)
            .load_all()
            .context("Failed to load model artifacts")?;
        Ok(Self::from_artifacts(artifacts))
    }

    /// Create an inference engine from already-loaded artifacts.
    pub fn from_artifacts(artifacts: LoadedArtifacts) -> Self {
        Self {
            vectorizer: artifacts.vectorizer,
            selector: artifacts.selector,
            regressor: artifacts.regressor,
            classifier: artifacts.classifier,
        }
    }

    /// Size of the vectorizer vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary.len()
    }

    /// Number of columns the selector keeps for the linear path.
    pub fn selected_features(&self) -> usize {
        self.selector.output_dim()
    }

    /// Run both predictors over one normalized document.
    ///
    /// The linear path goes through the feature selector; the classification
    /// path consumes the full feature vector directly.
    pub fn predict(&self, normalized_text: &str) -> Result<RatingPrediction> {
        let features = self.vectorizer.transform(normalized_text);

        let selected = self
            .selector
            .transform(&features)
            .context("Feature selection failed")?;
        let rating = self
            .regressor
            .predict(&selected)
            .context("Linear rating prediction failed")?;

        let bucket_index = self
            .classifier
            .predict(&features)
            .context("Rating bucket classification failed")?;

        debug!(rating, bucket_index, "Inference complete");

        Ok(RatingPrediction {
            rating,
            bucket_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::TextNormalizer;
    use std::collections::HashMap;

    /// Artifacts crafted so "great book wonderful story adventure" scores a
    /// 4.2 rating and lands in bucket 3.
    fn test_artifacts() -> LoadedArtifacts {
        let vocabulary = HashMap::from([
            ("great".to_string(), 0),
            ("book".to_string(), 1),
            ("wonderful".to_string(), 2),
            ("story".to_string(), 3),
            ("adventure".to_string(), 4),
        ]);

        LoadedArtifacts {
            vectorizer: TfidfVectorizer {
                schema_version: 1,
                vocabulary,
                idf: vec![1.0; 5],
            },
            selector: FeatureSelector {
                schema_version: 1,
                input_dim: 5,
                selected: vec![0, 2],
            },
            regressor: LinearRegressor {
                schema_version: 1,
                coefficients: vec![0.0, 0.0],
                intercept: 4.2,
            },
            classifier: RatingClassifier {
                schema_version: 1,
                coefficients: vec![
                    vec![0.0; 5],
                    vec![0.0; 5],
                    vec![0.0; 5],
                    vec![1.0, 0.0, 0.0, 0.0, 0.0],
                    vec![0.0; 5],
                ],
                intercepts: vec![0.0; 5],
            },
        }
    }

    #[test]
    fn test_end_to_end_prediction() {
        let normalizer = TextNormalizer::from_list(&["the", "a", "of"]);
        let normalized = normalizer.normalize("The Great Book", "A wonderful story of adventure");
        assert_eq!(normalized, "great book wonderful story adventure");

        let engine = InferenceEngine::from_artifacts(test_artifacts());
        let prediction = engine.predict(&normalized).unwrap();

        assert!((prediction.rating - 4.2).abs() < 1e-12);
        assert_eq!(prediction.bucket_index, 3);
        assert_eq!(prediction.bucket_label(), "(4.0, 4.5]");
    }

    #[test]
    fn test_empty_text_still_predicts() {
        let engine = InferenceEngine::from_artifacts(test_artifacts());
        let prediction = engine.predict("").unwrap();

        // Zero vector: the linear path falls back to the intercept, the
        // classifier to the highest intercept (ties to class 0).
        assert!((prediction.rating - 4.2).abs() < 1e-12);
        assert_eq!(prediction.bucket_index, 0);
    }

    #[test]
    fn test_out_of_vocabulary_text_predicts() {
        let engine = InferenceEngine::from_artifacts(test_artifacts());
        let prediction = engine.predict("entirely unknown tokens").unwrap();
        assert!((prediction.rating - 4.2).abs() < 1e-12);
    }

    #[test]
    fn test_engine_dimensions() {
        let engine = InferenceEngine::from_artifacts(test_artifacts());
        assert_eq!(engine.vocabulary_size(), 5);
        assert_eq!(engine.selected_features(), 2);
    }
}
