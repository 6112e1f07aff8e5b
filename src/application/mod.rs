//! Application layer: the stateless null-safe operations.
//!
//! Every operation is an independent function composing providers and
//! collections into derived optional values, defaults, or aggregates.
//! Control flow is a flat call into a provider followed by
//! presence-checking and fallback or aggregation logic; no operation
//! depends on another.
//!
//! - [`optionals`] — constructors lifting possibly-absent values into `Option`
//! - [`queries`] — retrieval with defaults, fallbacks, projections, filters
//! - [`workflows`] — the side-effecting operations (`deposit`, `process_user`)
//! - [`aggregates`] — maximum, minimum, and sum over collections

pub mod aggregates;
pub mod optionals;
pub mod queries;
pub mod workflows;

pub use aggregates::{
    calculate_total_credit_balance, find_min_balance_value, get_user_with_max_balance,
};
pub use optionals::{optional_of_string, optional_of_user};
pub use queries::{
    get_or_generate_user, get_user, get_user_or, get_user_with_fallback, retrieve_balance,
    retrieve_credit_balance, retrieve_user_gmail,
};
pub use workflows::{deposit, process_user};
