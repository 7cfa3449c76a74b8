//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The requested curve has no compiled-in parameter set.
    Configuration,

    /// No default curve is available for the field compiled into this build.
    Unsupported,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration => write!(f, "no valid parameter set"),
            Error::Unsupported => write!(f, "no curve defined for the compiled field"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
