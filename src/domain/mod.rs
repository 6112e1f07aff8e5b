//! Domain layer: the user/bank-account data model and its errors.
//!
//! Everything here is a plain value type with no lifecycle. There is no
//! persistence and no identity beyond the fields themselves.
//!
//! - [`User`] — identity, name, email, and a mutable `Decimal` balance
//! - [`UserBankAccount`] — a `User` plus an optional credit balance
//! - [`DomainError`] — the terminal error kinds raised by the operations

mod bank_account;
mod errors;
mod user;

pub use bank_account::UserBankAccount;
pub use errors::{DomainError, DomainResult};
pub use user::{User, UserBuilder};
