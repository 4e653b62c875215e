//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use manifold_core::CoreError;
use manifold_kube::KubeError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// User input rejected before doing any work
    #[error("Validation failed: {message}")]
    #[diagnostic(code(manifold::cli::validation))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Release lookup failed (not found, unreadable storage, ...)
    #[error("{message}")]
    #[diagnostic(code(manifold::cli::release))]
    Release {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Output could not be written
    #[error("{message}")]
    #[diagnostic(code(manifold::cli::write))]
    Write { message: String },

    /// Internal error (runtime, unexpected failure)
    #[error("Internal error: {message}")]
    #[diagnostic(code(manifold::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation { .. } => exit_codes::VALIDATION_ERROR,
            CliError::Release { .. } => exit_codes::RELEASE_ERROR,
            CliError::Write { .. } => exit_codes::IO_ERROR,
            CliError::Internal { .. } => exit_codes::ERROR,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            help: None,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidReleaseName { .. } => CliError::Validation {
                message: err.to_string(),
                help: Some(
                    "release names are lower case DNS labels, e.g. `my-app`".to_string(),
                ),
            },
            CoreError::InvalidNamespace { .. } | CoreError::InvalidSelector { .. } => {
                CliError::validation(err.to_string())
            }
            CoreError::UnsafeOutputPath { .. } | CoreError::Write { .. } => CliError::Write {
                message: err.to_string(),
            },
        }
    }
}

impl From<KubeError> for CliError {
    fn from(err: KubeError) -> Self {
        match err {
            KubeError::Core(core) => core.into(),
            KubeError::ReleaseNotFound { .. } | KubeError::RevisionNotFound { .. } => {
                CliError::Release {
                    message: err.to_string(),
                    help: Some("check the release name, namespace and --revision".to_string()),
                }
            }
            other => CliError::Release {
                message: other.to_string(),
                help: None,
            },
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_release_error() {
        let err: CliError = KubeError::ReleaseNotFound {
            name: "myapp".to_string(),
            namespace: "default".to_string(),
        }
        .into();

        assert_eq!(err.exit_code(), exit_codes::RELEASE_ERROR);
        assert_eq!(
            err.to_string(),
            "release 'myapp' not found in namespace 'default'"
        );
    }

    #[test]
    fn test_invalid_name_maps_to_validation() {
        let core = CoreError::InvalidReleaseName {
            name: "My_App".to_string(),
            reason: "bad".to_string(),
        };
        let err: CliError = KubeError::Core(core).into();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_write_failure_maps_to_io_exit_code() {
        let core = CoreError::Write {
            path: "myapp/templates/svc.yaml".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: CliError = core.into();

        assert_eq!(err.exit_code(), exit_codes::IO_ERROR);
        assert!(err.to_string().contains("myapp/templates/svc.yaml"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_storage_failure_message_is_kept() {
        let err: CliError = KubeError::Compression("unknown frame descriptor".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::RELEASE_ERROR);
        assert_eq!(err.to_string(), "compression error: unknown frame descriptor");
    }
}
