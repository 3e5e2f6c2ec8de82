use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every zone-resource operation.
///
/// All variants are serializable (tagged by `"code"`) for structured error reporting.
///
/// "Not found" and "ambiguous" singleton results are not errors; they come back
/// as [`Lookup`](crate::Lookup) variants.
///
/// # Failure classes
///
/// - Transport: [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)
/// - Remote rejection: [`Rejected`](Self::Rejected), [`ParseError`](Self::ParseError)
/// - Pre-flight validation (raised before any request is sent):
///   [`InvalidParameter`](Self::InvalidParameter),
///   [`MissingCredentials`](Self::MissingCredentials)
///
/// Nothing is retried inside this crate.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CfError {
    /// A network-level error occurred (DNS resolution failure, connection refused, TLS, ...).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with `success: false` or with a non-2xx status.
    #[error("{}", rejected_message(*status, api_code.as_deref(), message))]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// First API error code, if the body carried one.
        api_code: Option<String>,
        /// First API error message (or a generic description).
        message: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// A caller-supplied argument violates a pre-flight contract.
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// No usable authentication scheme could be built from configuration.
    #[error("Missing credentials: {field}")]
    MissingCredentials {
        /// The configuration key that was expected.
        field: String,
    },

    /// Pagination reached its page cap while pages were still non-empty.
    #[error("Page limit exceeded: more than {max_pages} pages")]
    PageLimitExceeded {
        /// Configured cap.
        max_pages: u32,
    },
}

fn rejected_message(status: u16, api_code: Option<&str>, message: &str) -> String {
    match api_code {
        Some(code) => format!("API rejected request (HTTP {status}, code {code}): {message}"),
        None => format!("API rejected request (HTTP {status}): {message}"),
    }
}

impl CfError {
    /// Shortcut for [`CfError::InvalidParameter`].
    pub fn invalid_parameter(param: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            detail: detail.into(),
        }
    }

    /// Shortcut for [`CfError::ParseError`].
    pub fn parse(detail: impl ToString) -> Self {
        Self::ParseError {
            detail: detail.to_string(),
        }
    }

    /// Whether the failure is an expected outcome (caller input, remote
    /// rejection) rather than a fault. Used to pick the log level:
    /// `true` logs at `warn`, `false` at `error`.
    ///
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Rejected { .. }
                | Self::InvalidParameter { .. }
                | Self::MissingCredentials { .. }
                | Self::PageLimitExceeded { .. }
        )
    }

    /// Whether the error was raised before any request left the process.
    #[must_use]
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. }
                | Self::MissingCredentials { .. }
                | Self::SerializationError { .. }
        )
    }
}

/// Convenience type alias for `Result<T, CfError>`.
pub type Result<T> = std::result::Result<T, CfError>;

/// Collapses a mutation result into the "applied / not applied" boolean.
///
/// Callers that only care whether a change reached the remote zone can use
/// `service.create_rule(..).await.applied()`. Any failure is logged and
/// reported as `false`; a `false` must always be read as "not applied".
pub trait OutcomeExt {
    /// `true` when the operation succeeded.
    fn applied(self) -> bool;
}

impl OutcomeExt for Result<()> {
    fn applied(self) -> bool {
        match self {
            Ok(()) => true,
            Err(e) if e.is_expected() => {
                log::warn!("Change not applied: {e}");
                false
            }
            Err(e) => {
                log::error!("Change not applied: {e}");
                false
            }
        }
    }
}
