//! Optional-value constructors.
//!
//! Rust has no null, so "wrap a possibly-absent value" becomes lifting either
//! a bare value or an already-optional value into `Option`. Both constructors
//! are pure, total, and never fail.

use crate::domain::User;

/// Wraps a possibly-absent text value into an `Option`.
///
/// Accepts either a `String` (present) or an `Option<String>` (passed
/// through), mirroring a nullable parameter.
///
/// # Examples
///
/// ```rust
/// use userbank::application::optionals::optional_of_string;
///
/// assert_eq!(optional_of_string("hello".to_string()), Some("hello".to_string()));
/// assert_eq!(optional_of_string(None), None);
/// ```
pub fn optional_of_string(text: impl Into<Option<String>>) -> Option<String> {
    text.into()
}

/// Wraps a possibly-absent [`User`] into an `Option`.
///
/// # Examples
///
/// ```rust
/// use userbank::application::optionals::optional_of_user;
/// use userbank::domain::User;
///
/// assert!(optional_of_user(User::generate()).is_some());
/// assert_eq!(optional_of_user(None), None);
/// ```
pub fn optional_of_user(user: impl Into<Option<User>>) -> Option<User> {
    user.into()
}
