//! Settings file plus command-line overrides.
//!
//! The file lives at `~/.workday` and holds one `key = value` per line,
//! keyed by the long flag names. Lines starting with `#` are comments.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::clock::Window;
use crate::error::{Error, Result};
use crate::parser::parse_time;

pub const DEFAULT_START: &str = "9:00";
pub const DEFAULT_END: &str = "17:00";
pub const CONFIG_FILENAME: &str = ".workday";

/// Raw, unvalidated values from one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub start: Option<String>,
    pub end: Option<String>,
    pub help: bool,
}

impl Options {
    /// `other` wins wherever it has a value.
    pub fn overlay(self, other: Options) -> Options {
        Options {
            start: other.start.or(self.start),
            end: other.end.or(self.end),
            help: self.help || other.help,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub window: Window,
}

impl Config {
    pub fn resolve(options: &Options) -> Result<Config> {
        let start = options.start.as_ref().map_or(DEFAULT_START, String::as_str);
        let end = options.end.as_ref().map_or(DEFAULT_END, String::as_str);
        debug!("resolving window start={:?} end={:?}", start, end);
        let window = Window::new(parse_time(start)?, parse_time(end)?)?;
        Ok(Config { window })
    }
}

/// Combines file values with command-line values, flags taking precedence,
/// and fills in defaults for anything neither provides.
pub fn merge(file: Options, flags: Options) -> Result<Config> {
    Config::resolve(&file.overlay(flags))
}

pub fn default_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILENAME))
}

/// A missing file is the same as an empty one.
pub fn load(path: &Path) -> Result<Options> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            debug!("loaded {}", path.display());
            Ok(parse_config(&contents))
        }
        Err(ref err) if err.kind() == io::ErrorKind::NotFound => Ok(Options::default()),
        Err(source) => Err(Error::Config {
            path: path.to_owned(),
            source,
        }),
    }
}

pub fn parse_config(contents: &str) -> Options {
    let mut options = Options::default();
    for line in contents.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, '=').map(str::trim);
        let name = parts.next().unwrap_or("");
        let value = parts.next().filter(|v| !v.is_empty()).map(str::to_owned);
        match name {
            "start" => options.start = value.or(options.start),
            "end" => options.end = value.or(options.end),
            "help" => options.help = true,
            _ => warn!("ignoring unknown config key {:?}", name),
        }
    }
    options
}
