//! Rating prediction types and bucket labels

/// Ordered rating-bucket labels.
///
/// The classifier emits a class index that selects one of these positionally;
/// the classifier artifact must have been trained against the same bucketing.
pub const RATING_BUCKET_LABELS: [&str; 5] = [
    "(0, 3.0]",
    "(3.0, 3.5]",
    "(3.5, 4.0]",
    "(4.0, 4.5]",
    "(4.5, 5.0]",
];

/// Result of running both predictors over one book
#[derive(Debug, Clone, PartialEq)]
pub struct RatingPrediction {
    /// Continuous rating estimate from the linear path
    pub rating: f64,
    /// Bucket index emitted by the classifier
    pub bucket_index: usize,
}

impl RatingPrediction {
    /// Human-readable label for the predicted bucket.
    ///
    /// Panics when the classifier emitted an index outside the label table.
    /// A mismatched artifact must never be remapped to a neighbouring bucket.
    pub fn bucket_label(&self) -> &'static str {
        RATING_BUCKET_LABELS[self.bucket_index]
    }
}
