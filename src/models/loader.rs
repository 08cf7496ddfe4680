//! Model artifact loader

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::regression::{LinearRegressor, RatingClassifier};
use crate::models::selector::FeatureSelector;
use crate::models::vectorizer::TfidfVectorizer;

/// Artifact schema version this build understands.
pub const ARTIFACT_SCHEMA_VERSION: u32 = 1;

/// Fixed artifact filenames inside the models directory.
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
pub const SELECTOR_FILE: &str = "feature_selector.json";
pub const REGRESSION_FILE: &str = "linear_regression.json";
pub const CLASSIFIER_FILE: &str = "rating_classifier.json";

/// The four deserialized model artifacts.
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub vectorizer: TfidfVectorizer,
    pub selector: FeatureSelector,
    pub regressor: LinearRegressor,
    pub classifier: RatingClassifier,
}

/// Loader for the serialized model artifacts.
pub struct ArtifactLoader {
    models_dir: PathBuf,
}

impl ArtifactLoader {
    /// Create a loader reading from the given models directory.
    pub fn new<P: AsRef<Path>>(models_dir: P) -> Self {
        Self {
            models_dir: models_dir.as_ref().to_path_buf(),
        }
    }

    /// Load and cross-check all four artifacts.
    pub fn load_all(&self) -> Result<LoadedArtifacts> {
        let vectorizer: TfidfVectorizer = self.load_artifact(VECTORIZER_FILE)?;
        self.check_version(vectorizer.schema_version, VECTORIZER_FILE)?;
        vectorizer
            .validate()
            .with_context(|| format!("Invalid artifact {}", VECTORIZER_FILE))?;
        info!(
            artifact = VECTORIZER_FILE,
            vocabulary = vectorizer.vocabulary.len(),
            columns = vectorizer.dimension(),
            "Vectorizer loaded"
        );

        let selector: FeatureSelector = self.load_artifact(SELECTOR_FILE)?;
        self.check_version(selector.schema_version, SELECTOR_FILE)?;
        selector
            .validate()
            .with_context(|| format!("Invalid artifact {}", SELECTOR_FILE))?;
        info!(
            artifact = SELECTOR_FILE,
            input_dim = selector.input_dim,
            selected = selector.output_dim(),
            "Feature selector loaded"
        );

        let regressor: LinearRegressor = self.load_artifact(REGRESSION_FILE)?;
        self.check_version(regressor.schema_version, REGRESSION_FILE)?;
        info!(
            artifact = REGRESSION_FILE,
            columns = regressor.dimension(),
            "Linear regression model loaded"
        );

        let classifier: RatingClassifier = self.load_artifact(CLASSIFIER_FILE)?;
        self.check_version(classifier.schema_version, CLASSIFIER_FILE)?;
        classifier
            .validate()
            .with_context(|| format!("Invalid artifact {}", CLASSIFIER_FILE))?;
        info!(
            artifact = CLASSIFIER_FILE,
            classes = classifier.class_count(),
            columns = classifier.dimension(),
            "Rating classifier loaded"
        );

        if selector.input_dim != vectorizer.dimension() {
            bail!(
                "selector expects {} input columns but the vectorizer produces {}",
                selector.input_dim,
                vectorizer.dimension()
            );
        }
        if regressor.dimension() != selector.output_dim() {
            bail!(
                "regression model expects {} columns but the selector keeps {}",
                regressor.dimension(),
                selector.output_dim()
            );
        }
        if classifier.dimension() != vectorizer.dimension() {
            bail!(
                "classifier expects {} columns but the vectorizer produces {}",
                classifier.dimension(),
                vectorizer.dimension()
            );
        }

        Ok(LoadedArtifacts {
            vectorizer,
            selector,
            regressor,
            classifier,
        })
    }

    /// Deserialize one artifact file from the models directory.
    fn load_artifact<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.models_dir.join(filename);
        let file = File::open(&path)
            .with_context(|| format!("Failed to open artifact {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize artifact {}", path.display()))
    }

    fn check_version(&self, version: u32, filename: &str) -> Result<()> {
        if version != ARTIFACT_SCHEMA_VERSION {
            bail!(
                "artifact {} has schema version {}, this build expects {}",
                filename,
                version,
                ARTIFACT_SCHEMA_VERSION
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_artifact(dir: &Path, filename: &str, value: serde_json::Value) {
        fs::write(dir.join(filename), value.to_string()).unwrap();
    }

    fn write_consistent_artifacts(dir: &Path) {
        write_artifact(
            dir,
            VECTORIZER_FILE,
            json!({
                "schema_version": 1,
                "vocabulary": {"great": 0, "book": 1, "adventure": 2},
                "idf": [1.0, 1.5, 2.0],
            }),
        );
        write_artifact(
            dir,
            SELECTOR_FILE,
            json!({
                "schema_version": 1,
                "input_dim": 3,
                "selected": [0, 2],
            }),
        );
        write_artifact(
            dir,
            REGRESSION_FILE,
            json!({
                "schema_version": 1,
                "coefficients": [0.5, -0.25],
                "intercept": 3.5,
            }),
        );
        write_artifact(
            dir,
            CLASSIFIER_FILE,
            json!({
                "schema_version": 1,
                "coefficients": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                "intercepts": [0.0, 0.1],
            }),
        );
    }

    #[test]
    fn test_load_all_artifacts() {
        let dir = TempDir::new().unwrap();
        write_consistent_artifacts(dir.path());

        let artifacts = ArtifactLoader::new(dir.path()).load_all().unwrap();

        assert_eq!(artifacts.vectorizer.dimension(), 3);
        assert_eq!(artifacts.selector.output_dim(), 2);
        assert_eq!(artifacts.regressor.dimension(), 2);
        assert_eq!(artifacts.classifier.class_count(), 2);
    }

    #[test]
    fn test_missing_artifact_names_the_file() {
        let dir = TempDir::new().unwrap();
        write_consistent_artifacts(dir.path());
        fs::remove_file(dir.path().join(REGRESSION_FILE)).unwrap();

        let error = ArtifactLoader::new(dir.path()).load_all().unwrap_err();
        assert!(format!("{:#}", error).contains(REGRESSION_FILE));
    }

    #[test]
    fn test_schema_version_mismatch_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_consistent_artifacts(dir.path());
        write_artifact(
            dir.path(),
            SELECTOR_FILE,
            json!({
                "schema_version": 2,
                "input_dim": 3,
                "selected": [0, 2],
            }),
        );

        let error = ArtifactLoader::new(dir.path()).load_all().unwrap_err();
        assert!(format!("{:#}", error).contains("schema version"));
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_consistent_artifacts(dir.path());
        write_artifact(
            dir.path(),
            SELECTOR_FILE,
            json!({
                "schema_version": 1,
                "input_dim": 7,
                "selected": [0, 2],
            }),
        );

        assert!(ArtifactLoader::new(dir.path()).load_all().is_err());
    }

    #[test]
    fn test_malformed_artifact_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_consistent_artifacts(dir.path());
        fs::write(dir.path().join(CLASSIFIER_FILE), "not json").unwrap();

        let error = ArtifactLoader::new(dir.path()).load_all().unwrap_err();
        assert!(format!("{:#}", error).contains(CLASSIFIER_FILE));
    }
}
