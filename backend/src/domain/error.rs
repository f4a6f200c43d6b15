//! Domain-level error type.
//!
//! Errors stay transport agnostic: they carry a stable [`ErrorCode`], a
//! human-readable message, and for validation failures the full list of
//! violations. The HTTP adapter decides how each code is rendered.

use crate::domain::TraceId;

/// Stable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is structurally incomplete or malformed.
    InvalidRequest,
    /// One or more fields failed validation.
    ValidationFailed,
    /// The requested user does not exist.
    NotFound,
    /// The request collides with an existing user.
    Conflict,
    /// An unexpected error occurred inside the service.
    InternalError,
}

impl ErrorCode {
    /// Snake-case identifier used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::ValidationFailed => "validation_failed",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::InternalError => "internal_error",
        }
    }
}

/// Domain error payload.
///
/// Construction captures the [`TraceId`] in scope, so errors raised while
/// serving a request are correlated without threading the identifier
/// through every call.
///
/// # Examples
/// ```
/// use user_registry::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("user not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "user not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    violations: Vec<String>,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            violations: Vec::new(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Individual violations reported by validation, in check order.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Correlation identifier captured at construction.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Override the captured correlation identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Build an [`ErrorCode::ValidationFailed`] error from a violation list.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::Error;
    ///
    /// let err = Error::validation(["age must be a positive integer"]);
    /// assert_eq!(err.violations().len(), 1);
    /// ```
    pub fn validation<I, S>(violations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut error = Self::new(ErrorCode::ValidationFailed, "user data failed validation");
        error.violations = violations.into_iter().map(Into::into).collect();
        error
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.violations.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.message, self.violations.join("; "))
        }
    }
}

impl std::error::Error for Error {}
