//! Error types for output path resolution and its collaborators

use std::path::PathBuf;

/// Errors raised while classifying raw paths or resolving output paths.
///
/// Every variant describes a caller or configuration mistake; none of them
/// is transient, so callers should report and stop rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid configuration: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid output path '{}' for directory input '{}': expected a directory", output.display(), input.display())]
    InvalidOutputPath { input: PathBuf, output: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ResolveError {
    pub fn configuration(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path,
        }
    }

    pub fn invalid_output_path(input: PathBuf, output: PathBuf) -> Self {
        Self::InvalidOutputPath { input, output }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration {
                message,
                path: Some(path),
            } => format!("{} ({})", message, path.display()),
            Self::Configuration { message, path: None } => message.clone(),
            Self::InvalidOutputPath { output, .. } => format!(
                "Output path for directory input should be a directory path, got '{}'",
                output.display()
            ),
            Self::InvalidArgument { message } => message.clone(),
            Self::Io {
                message,
                path: Some(path),
            } => format!("{}: {}", path.display(), message),
            Self::Io { message, path: None } => message.clone(),
        }
    }
}

impl From<walkdir::Error> for ResolveError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        Self::io(err.to_string(), path)
    }
}

/// Result type for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;
