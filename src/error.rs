use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Authentication rejected by inference API (HTTP {status}): {message}")]
    Auth { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Upstream service error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },
    #[error("Response parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, OutlineError>;

impl OutlineError {
    /// Map a non-2xx HTTP status from the inference endpoint to an error.
    ///
    /// 401/403 are authentication rejections (403 covers gated models that
    /// require accepting terms); everything else non-2xx is an upstream
    /// service failure, including 429 rate limits.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => OutlineError::Auth { status, message },
            _ => OutlineError::Upstream { status, message },
        }
    }

    /// Whether a caller could reasonably retry the failed request.
    ///
    /// Timeouts, connectivity failures, rate limits, and server-side errors
    /// are transient. Validation, configuration, and authentication failures
    /// are permanent until the input changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            OutlineError::Network(_) => true,
            OutlineError::Upstream { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    /// Short machine-readable kind label, used in log context.
    pub fn kind(&self) -> &'static str {
        match self {
            OutlineError::Validation(_) => "validation",
            OutlineError::Config(_) => "config",
            OutlineError::Auth { .. } => "auth",
            OutlineError::Network(_) => "network",
            OutlineError::Upstream { .. } => "upstream",
            OutlineError::Parse(_) => "parse",
            OutlineError::Serialization(_) => "serialization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            OutlineError::from_status(401, "bad token"),
            OutlineError::Auth { status: 401, .. }
        ));
        assert!(matches!(
            OutlineError::from_status(403, "gated model"),
            OutlineError::Auth { status: 403, .. }
        ));
        assert!(matches!(
            OutlineError::from_status(429, "rate limited"),
            OutlineError::Upstream { status: 429, .. }
        ));
        assert!(matches!(
            OutlineError::from_status(503, "overloaded"),
            OutlineError::Upstream { status: 503, .. }
        ));
        assert!(matches!(
            OutlineError::from_status(404, "no such model"),
            OutlineError::Upstream { status: 404, .. }
        ));
    }

    #[test]
    fn test_retryable() {
        assert!(OutlineError::Network("timed out".into()).is_retryable());
        assert!(OutlineError::from_status(429, "").is_retryable());
        assert!(OutlineError::from_status(503, "").is_retryable());
        assert!(!OutlineError::from_status(404, "").is_retryable());
        assert!(!OutlineError::from_status(401, "bad token").is_retryable());
        assert!(!OutlineError::Validation("empty topic".into()).is_retryable());
    }

    #[test]
    fn test_display() {
        let err = OutlineError::Upstream {
            status: 429,
            message: "slow down".into(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream service error (HTTP 429): slow down"
        );
        assert_eq!(err.kind(), "upstream");
    }
}
