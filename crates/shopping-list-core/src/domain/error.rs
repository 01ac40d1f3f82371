//! Error Taxonomy
//!
//! `EmptyInput` and `DuplicateItem` are user mistakes reported through a
//! notice. Storage and corrupt-data errors propagate to the UI boundary.

use thiserror::Error;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Failures of the key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("item text is empty")]
    EmptyInput,
    #[error("item already exists: {0}")]
    DuplicateItem(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored list is not a JSON array of strings: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl ListError {
    /// True for errors caused by user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(self, ListError::EmptyInput | ListError::DuplicateItem(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(ListError::EmptyInput.is_user_error());
        assert!(ListError::DuplicateItem("Milk".into()).is_user_error());
        assert!(!ListError::from(StorageError::Backend("quota".into())).is_user_error());
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err = ListError::from(StorageError::Unavailable("no window".into()));
        assert_eq!(err.to_string(), "storage unavailable: no window");
    }
}
