// Copyright 2024 Martin Pool

//! Compute factorials two ways, iteratively and recursively, and cross-check
//! them against each other and against a table of known answers.
//!
//! ```
//! assert_eq!(factorial::factorial_iterative(10), 3_628_800);
//! assert_eq!(factorial::factorial_recursive(10), 3_628_800);
//! ```

pub mod check;
mod compute;
mod error;
pub mod exit_code;
mod method;

pub use crate::compute::{
    checked_factorial_iterative, checked_factorial_recursive, factorial_iterative,
    factorial_recursive, parse_input, MAX_INPUT,
};
pub use crate::error::{Error, Result};
pub use crate::method::{Method, MethodChoice};
