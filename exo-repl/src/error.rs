use ariadne::Source;
use exo_attrs::ErrorKind;
use std::{fmt, io, path::PathBuf};

/// Reports the error to stderr, highlighting its spans in `input`.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type does not implement `Display`, so it can
/// only be printed with its `eprint` method.
pub fn report_to_stderr(err: &exo_error::Error, input: &str) {
    let report = err.build_report("input");
    if let Err(io_err) = report.eprint(("input", Source::from(input))) {
        log::error!("could not print report: {}", io_err);
    }
}

/// A command was given without its argument.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("the `{}` command expects {}", self.command, self.expected),
    labels = ["this command"],
    help = format!("try `{} <{}>`", self.command, self.expected),
)]
pub struct MissingArgument {
    pub command: &'static str,
    pub expected: &'static str,
}

/// The argument of `seed` is not a valid seed.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "invalid seed",
    labels = ["this is not a nonnegative integer"],
    help = "seeds are integers between 0 and 18446744073709551615",
)]
pub struct InvalidSeed;

/// No exercise has been generated yet.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "there is no exercise to solve",
    labels = ["here"],
    help = "generate one first, for example with `gen quadratic`",
)]
pub struct NoExercise;

/// Errors that can occur while loading the generator configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, err: io::Error },

    /// The file is not a valid configuration.
    Toml { path: PathBuf, err: toml::de::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io { path, err } => write!(f, "could not read `{}`: {}", path.display(), err),
            Self::Toml { path, err } => write!(f, "invalid configuration in `{}`: {}", path.display(), err),
        }
    }
}

impl std::error::Error for ConfigError {}
