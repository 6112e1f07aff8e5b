//! Stream-style aggregations over user collections.
//!
//! Each aggregate is a single linear scan. The floating-point results of
//! [`find_min_balance_value`] and [`calculate_total_credit_balance`] go
//! through `Decimal::to_f64`, reproducing the lossy decimal-to-double
//! narrowing of the original rather than preserving full precision.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::{DomainError, DomainResult, User, UserBankAccount};

/// Returns the user with the greatest balance.
///
/// Ties keep the first-encountered maximum (stable linear scan).
///
/// # Errors
///
/// [`DomainError::EmptyInput`] when `users` is empty.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use userbank::application::aggregates::get_user_with_max_balance;
/// use userbank::domain::User;
///
/// let users = vec![
///     User::builder().id(1).balance(Decimal::from(5)).build(),
///     User::builder().id(2).balance(Decimal::from(9)).build(),
/// ];
///
/// let richest = get_user_with_max_balance(&users).unwrap();
/// assert_eq!(richest.id, 2);
/// ```
pub fn get_user_with_max_balance(users: &[User]) -> DomainResult<&User> {
    users
        .iter()
        .reduce(|best, candidate| {
            if candidate.balance > best.balance {
                candidate
            } else {
                best
            }
        })
        .ok_or(DomainError::EmptyInput)
}

/// Returns the smallest balance across `users` as a floating-point value.
///
/// Empty input yields `None`.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use userbank::application::aggregates::find_min_balance_value;
/// use userbank::domain::User;
///
/// let users = vec![
///     User::builder().balance(Decimal::from(7)).build(),
///     User::builder().balance(Decimal::from(3)).build(),
/// ];
///
/// assert_eq!(find_min_balance_value(&users), Some(3.0));
/// assert_eq!(find_min_balance_value(&[]), None);
/// ```
pub fn find_min_balance_value(users: &[User]) -> Option<f64> {
    users
        .iter()
        .map(|user| decimal_to_f64(user.balance))
        .reduce(f64::min)
}

/// Sums the credit balance of every account as a floating-point value.
///
/// Absence is fatal here, not zero: the per-element unwrap is unconditional,
/// so a single account without a credit line aborts the whole aggregation.
/// An empty slice sums to `0.0`.
///
/// # Errors
///
/// [`DomainError::ValueRequired`] when any account's credit balance is
/// absent.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use userbank::application::aggregates::calculate_total_credit_balance;
/// use userbank::domain::{User, UserBankAccount};
///
/// let accounts = vec![
///     UserBankAccount::new(User::generate(), Some(Decimal::new(35, 1))),
///     UserBankAccount::new(User::generate(), Some(Decimal::new(25, 1))),
/// ];
///
/// assert_eq!(calculate_total_credit_balance(&accounts), Ok(6.0));
/// ```
pub fn calculate_total_credit_balance(accounts: &[UserBankAccount]) -> DomainResult<f64> {
    accounts.iter().try_fold(0.0_f64, |total, account| {
        let credit = account
            .credit_balance()
            .ok_or(DomainError::ValueRequired)?;
        Ok(total + decimal_to_f64(credit))
    })
}

// to_f64 is total over Decimal's range; the conversion only loses precision.
fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
