//! Book input data structures

/// A book submitted for rating inference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    /// Title as entered by the user
    pub title: String,
    /// Free-text description as entered by the user
    pub description: String,
}

impl BookInput {
    /// Create a new book input
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
