use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::clock::TimeOfDay;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Not a 24-hour `HH:MM` time.
    Parse { input: String },
    InvertedWindow { start: TimeOfDay, end: TimeOfDay },
    Config { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;

        match self {
            Parse { input } => write!(f, "invalid time {:?} (expected 24-hour HH:MM)", input),
            InvertedWindow { start, end } => write!(
                f,
                "end time {} is before start time {} (windows past midnight are not supported)",
                end, start
            ),
            Config { path, source } => write!(f, "unable to read {}: {}", path.display(), source),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}
