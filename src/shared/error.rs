use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the listing was rendered (including an empty result)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog unavailable, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the discovery host.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: The catalog must be a JSON array of vendor summaries")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Invalid catalog source: {source_ref}\nReason: {reason}\n\n💡 Hint: Use a path to a JSON file or an http(s) URL")]
    InvalidCatalogSource { source_ref: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for configuration and builder input
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Failure of a catalog fetch.
///
/// Surfaced to the error boundary, which renders a retry view instead of
/// crashing the surrounding page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The catalog could not be reached
    #[error("Catalog unavailable: {details}")]
    Unavailable { details: String },

    /// The catalog answered but refused the request
    #[error("Catalog rejected the request: {message}")]
    Rejected { message: String },

    /// The catalog answered with something unreadable
    #[error("Catalog returned an invalid response: {details}")]
    InvalidResponse { details: String },
}

impl FetchError {
    /// Classifies an adapter error. Typed `FetchError`s pass through,
    /// anything else counts as the catalog being unavailable.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        match err.downcast::<FetchError>() {
            Ok(fetch_error) => fetch_error,
            Err(other) => FetchError::Unavailable {
                details: format!("{:#}", other),
            },
        }
    }

    /// Short message shown to the viewer
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Unavailable { .. } => {
                "We couldn't load vendors right now. Please try again."
            }
            FetchError::Rejected { .. } => "These filters couldn't be applied. Please try again.",
            FetchError::InvalidResponse { .. } => {
                "Something went wrong while loading vendors. Please try again."
            }
        }
    }
}
