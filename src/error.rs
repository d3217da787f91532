//! Error types for the result workspace.
//!
//! Every failure the workspace can hit is recoverable: each variant maps to
//! a user notice instead of unwinding past the component that issued the
//! call.
//! - `AppError`: the single error channel for validation and remote calls
//! - `Result<T>`: type alias for Results using AppError

use thiserror::Error;

/// Fallback text used when a failed remote call carries no usable message.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// URL input was blank
    #[error("Please enter a URL.")]
    EmptyUrl,

    /// URL input did not start with `http://` or `https://`
    #[error("Please enter a valid URL (must start with http:// or https://)")]
    InvalidUrl(String),

    /// `analyze` failed; carries the best available message
    #[error("Error: {0}")]
    Analysis(String),

    /// `list_results` failed
    #[error("Error fetching results: {0}")]
    Fetch(String),

    /// One item of a bulk reanalysis failed
    #[error("Error reanalyzing {url}: {message}")]
    ReanalyzeItem { url: String, message: String },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl AppError {
    /// Create an analysis error, substituting the fallback for empty text.
    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis(non_empty(msg.into()))
    }

    /// Create a fetch error, substituting the fallback for empty text.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(non_empty(msg.into()))
    }

    /// Wrap a failed `analyze` call made on behalf of a bulk reanalysis.
    pub fn reanalyze_item(url: impl Into<String>, cause: &AppError) -> Self {
        let message = match cause {
            AppError::Analysis(msg) | AppError::Fetch(msg) => msg.clone(),
            other => other.to_string(),
        };
        Self::ReanalyzeItem {
            url: url.into(),
            message,
        }
    }

    /// Blocking errors stop the workflow and demand acknowledgement; the
    /// rest are reported alongside a workflow that keeps running.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, AppError::ReanalyzeItem { .. })
    }

    /// Validation errors never reach the gateway.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyUrl | AppError::InvalidUrl(_))
    }
}

fn non_empty(msg: String) -> String {
    if msg.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        msg
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
