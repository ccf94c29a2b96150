// Copyright 2022-2024 Martin Pool.

//! `.factorial.toml` configuration file.
//!
//! The config file is read after parsing command line arguments, because
//! they can name a different file or skip it entirely.
//!
//! The config file is then merged in to the [Options](crate::options::Options).

use std::default::Default;
use std::fs::read_to_string;

use anyhow::Context;
use camino::Utf8Path;
use serde::Deserialize;

use factorial::MethodChoice;

use crate::Result;

/// Name of the config file looked for in the current directory.
pub const DEFAULT_CONFIG_NAME: &str = ".factorial.toml";

/// Configuration read from a config file.
///
/// This is similar to `Options`, and eventually merged into it, but separate because it
/// can be deserialized.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Methods to run when none is given on the command line.
    pub method: Option<MethodChoice>,
    /// Print results as JSON.
    pub json: bool,
}

impl Config {
    pub fn read_file(path: &Utf8Path) -> Result<Config> {
        let toml = read_to_string(path).with_context(|| format!("read config {path:?}"))?;
        toml::de::from_str(&toml).with_context(|| format!("parse toml from {path:?}"))
    }

    /// Read `.factorial.toml` from `dir`, and return a default (empty)
    /// Config if the file does not exist.
    pub fn read_dir_config(dir: &Utf8Path) -> Result<Config> {
        let path = dir.join(DEFAULT_CONFIG_NAME);
        if path.exists() {
            Config::read_file(&path)
        } else {
            Ok(Config::default())
        }
    }
}
