// Copyright 2021-2024 Martin Pool

//! `factorial`: Compute factorials iteratively and recursively, and check that they agree.

mod config;
mod console;
mod options;

use std::io;
use std::process::exit;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{generate, Shell};
use serde::Serialize;
use tracing::{debug, error, info};

use factorial::check::{run_checks, KNOWN_ANSWERS};
use factorial::{exit_code, parse_input, Method, MethodChoice};

use crate::config::Config;
use crate::options::Options;

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

/// Compute factorials iteratively and recursively, and check that they agree.
#[derive(Parser, PartialEq, Debug)]
#[command(name = "factorial", author, about)]
pub struct Args {
    /// compute the factorial of this number.
    #[arg(
        allow_negative_numbers = true,
        conflicts_with = "check",
        required_unless_present_any = ["check", "completions", "version"]
    )]
    n: Option<i64>,

    /// run every method against the table of known answers.
    #[arg(long)]
    check: bool,

    /// generate autocompletions for the given shell.
    #[arg(long)]
    completions: Option<Shell>,

    /// read configuration from this TOML file, rather than `.factorial.toml`.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// output json.
    #[arg(long)]
    json: bool,

    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(
        long,
        short = 'L',
        default_value = "warn",
        env = "FACTORIAL_TRACE_LEVEL"
    )]
    level: tracing::Level,

    /// which implementation to run; `both` cross-checks them.
    #[arg(long, short = 'm')]
    method: Option<MethodChoice>,

    /// don't read any config file.
    #[arg(long, conflicts_with = "config")]
    no_config: bool,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version: bool,
}

/// One computed factorial, as printed by `--json`.
#[derive(Debug, Serialize)]
struct Answer {
    n: u32,
    value: u128,
    methods: Vec<Method>,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            exit(if err.use_stderr() {
                exit_code::USAGE
            } else {
                exit_code::SUCCESS
            });
        }
    };
    console::setup_global_trace(args.level)?;

    if args.version {
        println!("{NAME} {VERSION}");
        return Ok(());
    } else if let Some(shell) = args.completions {
        generate(shell, &mut Args::command(), NAME, &mut io::stdout());
        return Ok(());
    }

    let config = if args.no_config {
        Config::default()
    } else if let Some(path) = &args.config {
        Config::read_file(path)?
    } else {
        Config::read_dir_config(Utf8Path::new("."))?
    };
    debug!(?config);
    let options = Options::new(&args, &config);
    debug!(?options);

    if args.check {
        let report = run_checks(KNOWN_ANSWERS, &options.methods);
        if options.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{report}");
        }
        exit(report.exit_code());
    }

    let n = args.n.context("no input given")?;
    let n = parse_input(n).context("invalid input")?;
    let value = match compute(n, &options.methods, Method::apply)? {
        Computed::Agreed(value) => value,
        Computed::Disagreed {
            first,
            first_value,
            other,
            other_value,
        } => {
            error!(
                n,
                "{first} method gave {first_value} but {other} method gave {other_value}"
            );
            exit(exit_code::SOFTWARE);
        }
    };
    if options.json {
        let answer = Answer {
            n,
            value,
            methods: options.methods,
        };
        println!("{}", serde_json::to_string(&answer)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// The result of running several methods on one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Computed {
    /// Every method gave this value.
    Agreed(u128),
    /// Two methods gave different values; later methods were not run.
    Disagreed {
        first: Method,
        first_value: u128,
        other: Method,
        other_value: u128,
    },
}

/// Run every method on `n`, computing each value with `apply`, and compare the results.
fn compute<F>(n: u32, methods: &[Method], apply: F) -> Result<Computed>
where
    F: Fn(Method, u32) -> factorial::Result<u128>,
{
    let mut agreed: Option<(Method, u128)> = None;
    for &method in methods {
        let value =
            apply(method, n).with_context(|| format!("compute {n}! with the {method} method"))?;
        info!(%method, n, %value, "computed");
        match agreed {
            None => agreed = Some((method, value)),
            Some((first, first_value)) if first_value != value => {
                return Ok(Computed::Disagreed {
                    first,
                    first_value,
                    other: method,
                    other_value: value,
                });
            }
            Some(_) => (),
        }
    }
    agreed
        .map(|(_, value)| Computed::Agreed(value))
        .context("no methods selected")
}
