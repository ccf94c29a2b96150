// Copyright 2021-2024 Martin Pool

//! Print messages and logs to the terminal.

use std::io;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::Result;

/// Send `tracing` output at `console_trace_level` and above to stderr.
///
/// Stdout is kept clean for the results, so that it can be piped.
pub fn setup_global_trace(console_trace_level: Level) -> Result<()> {
    let level_filter = LevelFilter::from_level(console_trace_level);
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(::console::colors_enabled_stderr())
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(level_filter);
    tracing_subscriber::registry().with(console_layer).init();
    Ok(())
}
