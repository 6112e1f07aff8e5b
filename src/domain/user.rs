//! The `User` entity.
//!
//! A `User` is a plain data object: an identity, a display name, an email
//! address, and a mutable `Decimal` balance. Users are created either through
//! the fluent [`UserBuilder`] or through [`User::generate`], the fixed
//! fallback used when no provider yields a value.
//!
//! # Examples
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use userbank::domain::User;
//!
//! let user = User::builder()
//!     .id(42)
//!     .name("Alice")
//!     .email("alice@gmail.com")
//!     .balance(Decimal::new(2550, 2)) // 25.50
//!     .build();
//!
//! assert_eq!(user.id, 42);
//! assert_eq!(user.email, "alice@gmail.com");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user with an identity and a mutable account balance.
///
/// Fields are public: `User` is a value type owned by whichever caller holds
/// it, with no invariant beyond what the types express. The balance is the
/// only field the library itself mutates (see
/// [`deposit`](crate::application::workflows::deposit)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric identity.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address, compared literally by the gmail filter.
    pub email: String,
    /// Current account balance.
    pub balance: Decimal,
}

impl User {
    /// Starts building a `User`.
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Generates the fixed fallback user.
    ///
    /// Used by [`get_or_generate_user`](crate::application::queries::get_or_generate_user)
    /// when a provider yields nothing: id 1, name "John", email
    /// "m@gmail.com", balance 10.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use userbank::domain::User;
    ///
    /// let user = User::generate();
    /// assert_eq!(user.id, 1);
    /// assert_eq!(user.name, "John");
    /// assert_eq!(user.balance, Decimal::TEN);
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        Self {
            id: 1,
            name: "John".to_string(),
            email: "m@gmail.com".to_string(),
            balance: Decimal::TEN,
        }
    }
}

/// Fluent builder for [`User`].
///
/// Every field defaults to its zero value; setters consume and return the
/// builder so calls chain.
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    id: u64,
    name: String,
    email: String,
    balance: Decimal,
}

impl UserBuilder {
    /// Sets the identity.
    #[must_use]
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the balance.
    #[must_use]
    pub fn balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// Finishes the build.
    #[must_use]
    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Builder Tests
    // =========================================================================

    #[rstest]
    fn builder_sets_all_fields() {
        let user = User::builder()
            .id(7)
            .name("Alice")
            .email("alice@gmail.com")
            .balance(Decimal::new(1250, 2))
            .build();

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@gmail.com");
        assert_eq!(user.balance, Decimal::new(1250, 2));
    }

    #[rstest]
    fn builder_defaults_to_zero_values() {
        let user = User::builder().build();

        assert_eq!(user.id, 0);
        assert!(user.name.is_empty());
        assert!(user.email.is_empty());
        assert_eq!(user.balance, Decimal::ZERO);
    }

    // =========================================================================
    // generate Tests
    // =========================================================================

    #[rstest]
    fn generate_returns_fixed_user() {
        let user = User::generate();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "John");
        assert_eq!(user.email, "m@gmail.com");
        assert_eq!(user.balance, Decimal::TEN);
    }

    #[rstest]
    fn generate_is_referentially_transparent() {
        assert_eq!(User::generate(), User::generate());
    }

    // =========================================================================
    // Value Semantics Tests
    // =========================================================================

    #[rstest]
    fn clone_produces_equal_user() {
        let user = User::generate();
        let cloned = user.clone();

        assert_eq!(user, cloned);
    }

    #[rstest]
    fn balance_is_mutable_in_place() {
        let mut user = User::generate();
        user.balance += Decimal::ONE;

        assert_eq!(user.balance, Decimal::TEN + Decimal::ONE);
    }

    // =========================================================================
    // Serialization Tests
    // =========================================================================

    #[rstest]
    fn serialize_deserialize_roundtrip() {
        let original = User::builder()
            .id(3)
            .name("Bob")
            .email("bob@yahoo.com")
            .balance(Decimal::new(999, 1))
            .build();

        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(original, deserialized);
    }
}
