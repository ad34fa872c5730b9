//! Errors terminating a resolution run

use std::error;
use std::fmt;
use std::io;

use crate::addrinfo::ResolveError;

/// Represents a fatal error in a resolution run.
#[derive(Debug)]
pub enum Error {
    /// Wrong number of command-line arguments
    Usage {
        /// Name the program was invoked as
        program: String,
    },
    /// The local host name could not be determined
    Hostname(io::Error),
    /// The name-resolution service failed
    Resolve(ResolveError),
    /// Writing to an output stream failed
    Output(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Usage{ref program} => write!(f, "Usage: {} <hostname>", program),
            Error::Hostname(ref e) => write!(f, "gethostname(): {}", e),
            Error::Resolve(ref e) => write!(f, "getaddrinfo(): {}", e),
            Error::Output(ref e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Usage{..} => None,
            Error::Hostname(ref e) | Error::Output(ref e) => Some(e),
            Error::Resolve(ref e) => Some(e),
        }
    }
}

impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Error {
        Error::Resolve(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Output(err)
    }
}
