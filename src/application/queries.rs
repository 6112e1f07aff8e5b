//! Null-safe retrieval queries.
//!
//! Each query consults a provider once (unless documented otherwise) and
//! resolves absence with a default, a generated fallback, a projection, a
//! filter, or a terminal error. The presence/absence and error-versus-empty
//! distinctions are part of each function's contract.

use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult, User};
use crate::provider::{UserBankAccountProvider, UserProvider};

/// Returns the provided user, or `default_user` when none is available.
///
/// # Examples
///
/// ```rust
/// use userbank::application::queries::get_user_or;
/// use userbank::domain::User;
///
/// let fallback = User::builder().id(99).name("Fallback").build();
/// let user = get_user_or(&|| None::<User>, fallback.clone());
/// assert_eq!(user, fallback);
/// ```
pub fn get_user_or(provider: &impl UserProvider, default_user: User) -> User {
    provider.user().unwrap_or(default_user)
}

/// Returns the provided user, or fails with "No User provided!".
///
/// # Errors
///
/// [`DomainError::NoUserProvided`] when the provider yields nothing.
///
/// # Examples
///
/// ```rust
/// use userbank::application::queries::get_user;
/// use userbank::domain::{DomainError, User};
///
/// assert!(get_user(&|| Some(User::generate())).is_ok());
/// assert_eq!(get_user(&|| None::<User>), Err(DomainError::NoUserProvided));
/// ```
pub fn get_user(provider: &impl UserProvider) -> DomainResult<User> {
    provider.user().ok_or(DomainError::NoUserProvided)
}

/// Returns the provided user, or synthesizes the fixed fallback user.
///
/// The provider is queried exactly once; when it comes up empty the result is
/// [`User::generate`] (id 1, "John", "m@gmail.com", balance 10).
///
/// # Examples
///
/// ```rust
/// use userbank::application::queries::get_or_generate_user;
/// use userbank::domain::User;
///
/// let generated = get_or_generate_user(&|| None::<User>);
/// assert_eq!(generated, User::generate());
/// ```
pub fn get_or_generate_user(provider: &impl UserProvider) -> User {
    provider.user().unwrap_or_else(User::generate)
}

/// Projects the optional user onto its balance, preserving absence.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use userbank::application::queries::retrieve_balance;
/// use userbank::domain::User;
///
/// assert_eq!(retrieve_balance(&|| Some(User::generate())), Some(Decimal::TEN));
/// assert_eq!(retrieve_balance(&|| None::<User>), None);
/// ```
pub fn retrieve_balance(provider: &impl UserProvider) -> Option<Decimal> {
    provider.user().map(|user| user.balance)
}

/// Projects the optional bank account onto its optional credit balance.
///
/// A present account with no credit line yields `Ok(None)`. A *missing
/// account*, however, is an error, not a quiet empty result: the outer
/// optional is unconditionally unwrapped, so only the inner absence survives.
///
/// # Errors
///
/// [`DomainError::ValueRequired`] when the provider yields no account.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use userbank::application::queries::retrieve_credit_balance;
/// use userbank::domain::{DomainError, User, UserBankAccount};
///
/// let account = UserBankAccount::new(User::generate(), Some(Decimal::ONE));
/// let provider = move || Some(account.clone());
/// assert_eq!(retrieve_credit_balance(&provider), Ok(Some(Decimal::ONE)));
///
/// assert_eq!(
///     retrieve_credit_balance(&|| None::<UserBankAccount>),
///     Err(DomainError::ValueRequired)
/// );
/// ```
pub fn retrieve_credit_balance(
    provider: &impl UserBankAccountProvider,
) -> DomainResult<Option<Decimal>> {
    provider
        .bank_account()
        .map(|account| account.credit_balance())
        .ok_or(DomainError::ValueRequired)
}

/// Returns the provided user only if their email ends with "@gmail.com".
///
/// Absent when no user was provided or when the suffix does not match. The
/// comparison is literal; no normalization is applied.
///
/// # Examples
///
/// ```rust
/// use userbank::application::queries::retrieve_user_gmail;
/// use userbank::domain::User;
///
/// let gmail = User::builder().email("a@gmail.com").build();
/// assert!(retrieve_user_gmail(&|| Some(gmail.clone())).is_some());
///
/// let yahoo = User::builder().email("a@yahoo.com").build();
/// assert!(retrieve_user_gmail(&|| Some(yahoo.clone())).is_none());
/// ```
pub fn retrieve_user_gmail(provider: &impl UserProvider) -> Option<User> {
    provider
        .user()
        .filter(|user| user.email.ends_with("@gmail.com"))
}

/// Returns the primary provider's user, then the fallback's, then fails.
///
/// The fallback is consulted only when the primary yields nothing
/// (short-circuit), so exactly one provider is queried on the happy path.
///
/// # Errors
///
/// [`DomainError::ProvidersExhausted`] when both providers come up empty.
///
/// # Examples
///
/// ```rust
/// use userbank::application::queries::get_user_with_fallback;
/// use userbank::domain::{DomainError, User};
///
/// let user = get_user_with_fallback(&|| None::<User>, &|| Some(User::generate()));
/// assert_eq!(user, Ok(User::generate()));
///
/// let none = get_user_with_fallback(&|| None::<User>, &|| None::<User>);
/// assert_eq!(none, Err(DomainError::ProvidersExhausted));
/// ```
pub fn get_user_with_fallback(
    primary: &impl UserProvider,
    fallback: &impl UserProvider,
) -> DomainResult<User> {
    primary
        .user()
        .or_else(|| fallback.user())
        .ok_or(DomainError::ProvidersExhausted)
}
