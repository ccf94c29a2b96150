// Copyright 2021 - 2024 Martin Pool

//! Exit codes from the `factorial` command.
//!
//! These are assigned so that different cases that CI or other automation
//! might want to distinguish are distinct.

/// Everything worked, and all checks passed.
pub const SUCCESS: i32 = 0;

/// The wrong arguments, an unusable input, etc.
///
/// (1 is also the value returned by Clap, and by `main` returning an error.)
pub const USAGE: i32 = 1;

/// One or more known-answer checks failed.
pub const FOUND_PROBLEMS: i32 = 2;

/// The implementations disagreed with each other: an internal software error, from sysexit.
pub const SOFTWARE: i32 = 70;
