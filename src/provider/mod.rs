//! Provider capabilities.
//!
//! A provider is a single-method capability that yields an optional value.
//! Absence means "no value is available now" — nothing more. Providers are
//! not required to be idempotent: repeated calls may return different
//! results, and each operation documents how often it queries its provider.
//!
//! Blanket implementations make plain closures usable as providers, so call
//! sites stay as light as the function-typed dependencies they model:
//!
//! ```rust
//! use userbank::application::queries::retrieve_balance;
//! use userbank::domain::User;
//! use userbank::provider::UserProvider;
//!
//! let provider = || Some(User::generate());
//! assert!(provider.user().is_some());
//! assert!(retrieve_balance(&provider).is_some());
//! ```

use crate::domain::{User, UserBankAccount};

/// Yields an optional [`User`].
pub trait UserProvider {
    /// Returns the user, or `None` when no value is available now.
    fn user(&self) -> Option<User>;
}

impl<F> UserProvider for F
where
    F: Fn() -> Option<User>,
{
    fn user(&self) -> Option<User> {
        self()
    }
}

/// Yields mutable access to an optional [`User`].
///
/// The read-only [`UserProvider`] hands out owned values, which is enough for
/// every query in this crate. Depositing, however, must reach the user *in
/// place*: the balance update has to land in whatever storage the provider
/// fronts, so the mutable capability is a separate trait.
pub trait UserProviderMut {
    /// Returns mutable access to the user, or `None` when absent.
    fn user_mut(&mut self) -> Option<&mut User>;
}

/// The canonical mutable provider: an owned optional slot.
impl UserProviderMut for Option<User> {
    fn user_mut(&mut self) -> Option<&mut User> {
        self.as_mut()
    }
}

/// Yields an optional [`UserBankAccount`].
pub trait UserBankAccountProvider {
    /// Returns the bank account, or `None` when no value is available now.
    fn bank_account(&self) -> Option<UserBankAccount>;
}

impl<F> UserBankAccountProvider for F
where
    F: Fn() -> Option<UserBankAccount>,
{
    fn bank_account(&self) -> Option<UserBankAccount> {
        self()
    }
}

/// Consumes a user, or falls back when none was provided.
///
/// The fallback has a default body that prints `No user found` to standard
/// output, so implementors only have to say what happens when a user *is*
/// present. A bare `FnMut(User)` closure is a service with that default
/// fallback.
pub trait UserService {
    /// Processes the provided user.
    fn process_user(&mut self, user: User);

    /// Invoked when no user was provided.
    fn process_with_no_user(&mut self) {
        println!("No user found");
    }
}

impl<F> UserService for F
where
    F: FnMut(User),
{
    fn process_user(&mut self, user: User) {
        self(user);
    }
}
