//! Library-wide error and result types.

use std::fmt;
use std::io;

/// Result alias used throughout elephant-aead.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// The cipher itself has exactly one runtime failure mode: a forged or
/// corrupted message is rejected as [`Error::Authentication`]. The remaining
/// variants belong to the known-answer-test file parser in [`crate::kat`].
#[derive(Debug)]
pub enum Error {
    /// The authentication tag did not verify. The plaintext buffer has been
    /// zeroised; nothing about the message may be trusted.
    Authentication,
    /// A structural constraint of a KAT file was violated (message describes
    /// which one).
    Parse(&'static str),
    /// An underlying I/O operation failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication => write!(f, "authentication failed"),
            Error::Parse(s) => write!(f, "parse error: {s}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Error::Io(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
