//! `libris-core` — domain building blocks shared by the library crates.
//!
//! This crate contains **pure domain** primitives (no IO, no console).

pub mod aggregate;
pub mod error;
pub mod value_object;

pub use aggregate::{Aggregate, execute};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
