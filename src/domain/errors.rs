//! Domain errors.
//!
//! Every failure in this crate is terminal and surfaces synchronously to the
//! immediate caller; nothing is retried, logged, or swallowed. The messages
//! are part of the contract and are matched literally by callers and tests.

use thiserror::Error;

/// Errors raised by the null-safe operations.
///
/// # Examples
///
/// ```rust
/// use userbank::domain::DomainError;
///
/// assert_eq!(DomainError::NoUserProvided.to_string(), "No User provided!");
/// assert_eq!(DomainError::EmptyInput.to_string(), "Input list is empty!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An optional was force-unwrapped while empty.
    ///
    /// Raised by [`retrieve_credit_balance`](crate::application::queries::retrieve_credit_balance)
    /// when the account itself is absent, and by
    /// [`calculate_total_credit_balance`](crate::application::aggregates::calculate_total_credit_balance)
    /// when any account lacks a credit balance.
    #[error("Value required but absent")]
    ValueRequired,

    /// An aggregation was attempted over an empty collection.
    #[error("Input list is empty!")]
    EmptyInput,

    /// Both the primary and the fallback provider came up empty.
    #[error("No User provided by both providers!")]
    ProvidersExhausted,

    /// The single provider yielded no user.
    #[error("No User provided!")]
    NoUserProvided,
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
