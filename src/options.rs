// Copyright 2021-2024 Martin Pool

//! Global in-process options for the `factorial` command.
//!
//! The [Options] structure is built from command-line options and then
//! config options, and then passed down to the code that computes and prints
//! results.

use factorial::Method;

use crate::config::Config;
use crate::Args;

/// Options for one run of the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The methods to run, in order; at least one.
    pub methods: Vec<Method>,

    /// Print results as JSON rather than text.
    pub json: bool,
}

impl Options {
    /// Build options by merging command-line args and config file, with args taking
    /// precedence.
    pub fn new(args: &Args, config: &Config) -> Options {
        let choice = args.method.or(config.method).unwrap_or_default();
        Options {
            methods: choice.methods(),
            json: args.json || config.json,
        }
    }
}
