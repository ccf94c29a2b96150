// Copyright 2024 Martin Pool

//! Errors from computing factorials.

use std::fmt;

use crate::compute::MAX_INPUT;

/// An input that has no representable factorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Factorial is not defined for negative numbers.
    Negative(i64),
    /// The factorial of this input does not fit in a `u128`.
    Overflow(u64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Negative(n) => write!(f, "factorial is undefined for negative input {n}"),
            Error::Overflow(n) => write!(
                f,
                "{n}! does not fit in 128 bits; the largest supported input is {MAX_INPUT}"
            ),
        }
    }
}

impl std::error::Error for Error {}
