//! Null-safe user and bank account utilities.
//!
//! This crate demonstrates optional-value composition over a trivial
//! in-memory user/bank-account model: fallback chains, null-safe
//! projections, predicate filters, and stream-style aggregation, all
//! expressed through `Option`, `Result`, and single-method provider
//! capabilities.
//!
//! # Structure
//!
//! - [`domain`] — the `User` / `UserBankAccount` data model and error kinds
//! - [`provider`] — single-method capability traits yielding optional values
//! - [`application`] — the stateless operations composing the two
//!
//! # Design Principles
//!
//! - **Absence is explicit**: `Option` everywhere a value may be missing;
//!   no sentinels inside the value's own domain
//! - **Error versus empty is part of each contract**: some operations resolve
//!   absence with a default, others fail terminally with a fixed message
//! - **No hidden state**: every operation is a flat call into a provider
//!   followed by presence-checking logic
//!
//! # Examples
//!
//! ```rust
//! use userbank::application::{get_user_with_fallback, retrieve_balance};
//! use userbank::domain::User;
//!
//! let primary = || None::<User>;
//! let fallback = || Some(User::generate());
//!
//! let user = get_user_with_fallback(&primary, &fallback).unwrap();
//! assert_eq!(user.name, "John");
//!
//! assert!(retrieve_balance(&primary).is_none());
//! ```

pub mod application;
pub mod domain;
pub mod provider;
