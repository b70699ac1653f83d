use thiserror::Error;

/// Unified error type for changelog-watch operations
#[derive(Error, Debug)]
pub enum ChangelogWatchError {
    #[error("Document error: {0}")]
    Document(String),

    #[error("Edit rejected: {0}")]
    Edit(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-watch
pub type Result<T> = std::result::Result<T, ChangelogWatchError>;

impl ChangelogWatchError {
    /// Create a document error with context
    pub fn document(msg: impl Into<String>) -> Self {
        ChangelogWatchError::Document(msg.into())
    }

    /// Create an edit error with context
    pub fn edit(msg: impl Into<String>) -> Self {
        ChangelogWatchError::Edit(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ChangelogWatchError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogWatchError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChangelogWatchError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChangelogWatchError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ChangelogWatchError::version("test")
            .to_string()
            .contains("Version"));
        assert!(ChangelogWatchError::edit("test")
            .to_string()
            .contains("Edit"));
        assert!(ChangelogWatchError::document("test")
            .to_string()
            .contains("Document"));
    }

    #[test]
    fn test_error_all_variants() {
        let errors = vec![
            ChangelogWatchError::document("no open document"),
            ChangelogWatchError::edit("host rejected the batch"),
            ChangelogWatchError::version("bad triple"),
            ChangelogWatchError::config("bad toml"),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ChangelogWatchError::document("x"), "Document error"),
            (ChangelogWatchError::edit("x"), "Edit rejected"),
            (ChangelogWatchError::version("x"), "Version parsing error"),
            (ChangelogWatchError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
