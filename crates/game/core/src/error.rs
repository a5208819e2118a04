//! Common error infrastructure for quiz-core.
//!
//! Domain-specific errors (`ActionError`, `OracleError`) are defined in their
//! respective modules alongside the code that raises them. Every one of them
//! is a rejected action or missing collaborator, never a crash: callers
//! inspect the severity and simply do not proceed.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player may try a different action (e.g. a lifeline
///   that was already spent)
/// - **Validation**: malformed input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that requires investigation
/// - **Fatal**: a required collaborator is missing and the game cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the game continues, another action may succeed.
    ///
    /// Examples: no skips remaining, option eliminated by the cards
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: option index out of range, invalid card value
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: post-validation found a hidden correct option
    Internal,

    /// Fatal error - the engine cannot proceed.
    ///
    /// Examples: prize table or rng oracle missing from the environment
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all quiz-core errors.
///
/// Provides a uniform interface for error classification across the crate.
/// Error enums derive `thiserror::Error` for `Display` and implement this
/// trait to classify themselves.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields, presentation lookups and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
