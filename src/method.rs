// Copyright 2024 Martin Pool

//! Choice of factorial implementation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{checked_factorial_iterative, checked_factorial_recursive, Result};

/// One way of computing a factorial.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")] // consistent with Clap default
#[strum(serialize_all = "kebab-case")]
pub enum Method {
    /// Multiply a running product in a loop.
    Iterative,
    /// Recurse down to the base case at 1.
    Recursive,
}

impl Method {
    /// Compute `n!` with this method.
    pub fn apply(self, n: u32) -> Result<u128> {
        match self {
            Method::Iterative => checked_factorial_iterative(n),
            Method::Recursive => checked_factorial_recursive(n),
        }
    }
}

/// Which methods to run, from the command line or config file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MethodChoice {
    /// Only the iterative method.
    Iterative,
    /// Only the recursive method.
    Recursive,
    /// Both methods, cross-checked against each other.
    #[default]
    Both,
}

impl MethodChoice {
    /// The methods selected by this choice, in a stable order.
    pub fn methods(self) -> Vec<Method> {
        match self {
            MethodChoice::Iterative => vec![Method::Iterative],
            MethodChoice::Recursive => vec![Method::Recursive],
            MethodChoice::Both => Method::iter().collect(),
        }
    }
}
