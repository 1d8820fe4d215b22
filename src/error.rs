//! Diagnostic taxonomy for the cache's soft-failure paths.
//!
//! The cache never returns an error to its caller (see [`crate::cache`]): every
//! rejection is instead turned into a [`CacheDiagnostic`] and emitted on the
//! `tracing` channel. This module exists so that emission is structured and
//! typed rather than ad-hoc string formatting at each call site.
//!
//! - Use [`ErrorType`] when you know the semantic category.
//! - Use [`CacheDiagnostic`] as the concrete value that gets logged.
//! - Format: Display -> "[{code}] {message}"

use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorType {
    // 11xx Request issues
    ValidationReject,
    DuplicateId,
    UnknownOrderId,
    UnknownUser,
    UnknownSecurity,

    // 12xx Query issues
    EmptySides,
}

impl ErrorType {
    /// Numeric code for the error type.
    pub fn code(self) -> u32 {
        match self {
            ErrorType::ValidationReject => 1101,
            ErrorType::DuplicateId => 1102,
            ErrorType::UnknownOrderId => 1103,
            ErrorType::UnknownUser => 1104,
            ErrorType::UnknownSecurity => 1105,
            ErrorType::EmptySides => 1201,
        }
    }

    /// Default human message for the error type.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorType::ValidationReject => "Invalid order data, order not added",
            ErrorType::DuplicateId => "Order with this id already exists",
            ErrorType::UnknownOrderId => "No entry with the specified order id",
            ErrorType::UnknownUser => "No entry with the specified user",
            ErrorType::UnknownSecurity => "No entry with the specified security id",
            ErrorType::EmptySides => "Fewer than two sides present for this security",
        }
    }
}

/// A structured diagnostic describing a rejected or no-op cache operation.
///
/// `Display` renders as `"[{code}] {message}"`. Never returned to a caller;
/// see the module docs.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("[{code}] {message}")]
#[non_exhaustive]
pub struct CacheDiagnostic {
    pub code: u32,
    pub message: String,
}

impl CacheDiagnostic {
    /// Create from explicit code and message.
    #[inline]
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Create from a known error type, using its standard message.
    #[inline]
    pub fn from_type(t: ErrorType) -> Self {
        Self::new(t.code(), t.message())
    }

    /// Return a new diagnostic with the same code but a different message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<ErrorType> for CacheDiagnostic {
    #[inline]
    fn from(t: ErrorType) -> Self {
        Self::from_type(t)
    }
}
