//! Common types shared by the ittools crates.
//!
//! This crate provides the error type and the dynamic nested value model that
//! the algorithms in `ittools-core` operate on.

pub mod error;
pub mod value;

pub use error::{CommonError, Result};
pub use value::{Value, ValueType};
