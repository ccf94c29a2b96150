// Copyright 2024 Martin Pool

//! The two factorial implementations.

use crate::{Error, Result};

/// The largest `n` whose factorial fits in a `u128`.
pub const MAX_INPUT: u32 = 34;

/// Compute `n!` by multiplying a running product over `1..=n`.
///
/// # Panics
///
/// Panics if `n` is greater than [MAX_INPUT], because the result would overflow.
pub fn factorial_iterative(n: u32) -> u128 {
    assert_in_range(n);
    let mut product: u128 = 1;
    for i in 2..=n {
        product *= u128::from(i);
    }
    product
}

/// Compute `n!` as `n * (n-1)!`, with `0! = 1! = 1`.
///
/// Recursion depth is `n`, which is bounded by [MAX_INPUT].
///
/// # Panics
///
/// Panics if `n` is greater than [MAX_INPUT], because the result would overflow.
pub fn factorial_recursive(n: u32) -> u128 {
    assert_in_range(n);
    if n <= 1 {
        1
    } else {
        u128::from(n) * factorial_recursive(n - 1)
    }
}

/// Like [factorial_iterative], but returns an error rather than panicking on overflow.
pub fn checked_factorial_iterative(n: u32) -> Result<u128> {
    check_range(n)?;
    Ok(factorial_iterative(n))
}

/// Like [factorial_recursive], but returns an error rather than panicking on overflow.
pub fn checked_factorial_recursive(n: u32) -> Result<u128> {
    check_range(n)?;
    Ok(factorial_recursive(n))
}

/// Convert a signed input, for example from the command line, to one that
/// has a representable factorial.
pub fn parse_input(n: i64) -> Result<u32> {
    if n < 0 {
        return Err(Error::Negative(n));
    }
    let n = n as u64;
    match u32::try_from(n) {
        Ok(n) if n <= MAX_INPUT => Ok(n),
        _ => Err(Error::Overflow(n)),
    }
}

fn check_range(n: u32) -> Result<()> {
    if n > MAX_INPUT {
        Err(Error::Overflow(n.into()))
    } else {
        Ok(())
    }
}

fn assert_in_range(n: u32) {
    if let Err(err) = check_range(n) {
        panic!("{err}");
    }
}
