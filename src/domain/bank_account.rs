//! The `UserBankAccount` entity.
//!
//! A bank account is a [`User`] plus an optional credit balance. An absent
//! credit balance is a meaningful state of its own, distinct from a zero
//! balance, which is why the field is an `Option<Decimal>` rather than a
//! zero-defaulted `Decimal`.
//!
//! The original model extended `User` through inheritance; here it is
//! composition — the account owns its user snapshot. Field values are copied
//! from the base user at construction time and not synchronized afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// A user's bank account with an optional line of credit.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use userbank::domain::{User, UserBankAccount};
///
/// let with_credit = UserBankAccount::new(User::generate(), Some(Decimal::new(350, 2)));
/// assert_eq!(with_credit.credit_balance(), Some(Decimal::new(350, 2)));
///
/// let without_credit = UserBankAccount::new(User::generate(), None);
/// assert_eq!(without_credit.credit_balance(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBankAccount {
    /// The account holder, copied at construction time.
    pub user: User,
    credit_balance: Option<Decimal>,
}

impl UserBankAccount {
    /// Creates an account for `user` with an optional credit balance.
    #[must_use]
    pub fn new(user: User, credit_balance: Option<Decimal>) -> Self {
        Self {
            user,
            credit_balance,
        }
    }

    /// Returns the credit balance, or `None` when no credit line exists.
    #[must_use]
    pub const fn credit_balance(&self) -> Option<Decimal> {
        self.credit_balance
    }

    /// Replaces the credit balance. `None` removes the credit line.
    pub fn set_credit_balance(&mut self, credit_balance: Option<Decimal>) {
        self.credit_balance = credit_balance;
    }
}
