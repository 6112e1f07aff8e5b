//! Side-effecting workflows.
//!
//! The two operations here are the only ones in the crate with observable
//! effects: `deposit` mutates a user's balance in place, and `process_user`
//! delegates entirely to the injected [`UserService`].

use rust_decimal::Decimal;

use crate::provider::{UserProvider, UserProviderMut, UserService};

/// Adds `amount` to the balance of the user behind `provider`.
///
/// No-op when the provider yields no user. The amount's sign is not
/// validated; a negative amount withdraws.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use userbank::application::workflows::deposit;
/// use userbank::domain::User;
///
/// let mut slot = Some(User::generate());
/// deposit(&mut slot, Decimal::new(550, 2)); // 5.50
/// assert_eq!(slot.unwrap().balance, Decimal::new(1550, 2));
///
/// let mut empty: Option<User> = None;
/// deposit(&mut empty, Decimal::ONE); // no-op
/// assert!(empty.is_none());
/// ```
pub fn deposit(provider: &mut impl UserProviderMut, amount: Decimal) {
    if let Some(user) = provider.user_mut() {
        user.balance += amount;
    }
}

/// Dispatches the provided user to `service`, or its no-user fallback.
///
/// When the provider yields a user, it is passed to
/// [`UserService::process_user`]; otherwise
/// [`UserService::process_with_no_user`] runs (printing `No user found` by
/// default). The provider is queried exactly once.
///
/// # Examples
///
/// ```rust
/// use userbank::application::workflows::process_user;
/// use userbank::domain::User;
///
/// let mut names = Vec::new();
/// process_user(&|| Some(User::generate()), &mut |user: User| names.push(user.name));
/// assert_eq!(names, vec!["John".to_string()]);
/// ```
pub fn process_user(provider: &impl UserProvider, service: &mut impl UserService) {
    match provider.user() {
        Some(user) => service.process_user(user),
        None => service.process_with_no_user(),
    }
}
