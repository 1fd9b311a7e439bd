use std::string::FromUtf8Error;
use std::{fmt, io};

/// Errors that can occur while handing rendered output to its destination.
///
/// Rendering itself cannot fail; only converting or writing the bytes can.
#[derive(Debug)]
pub enum Error {
    /// The output is not valid UTF-8. Only bytes inserted with [crate::unsafe_bytes] can cause
    /// this.
    InvalidUtf8(FromUtf8Error),
    /// Writing the output failed.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<FromUtf8Error> for Error {
    fn from(value: FromUtf8Error) -> Self {
        return Error::InvalidUtf8(value);
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        return Error::Io(value);
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        return match self {
            Self::InvalidUtf8(err) => Some(err),
            Self::Io(err) => Some(err),
        };
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::InvalidUtf8(err) => write!(f, "rendered output is not valid UTF-8: {}", err),
            Self::Io(err) => write!(f, "failed to write rendered output: {}", err),
        };
    }
}
