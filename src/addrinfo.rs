//! `getaddrinfo` records as `IpAddr` values

use std::error;
use std::fmt;
use std::io;

use dns_lookup::{AddrInfo, AddrInfoIter, LookupError};

use crate::address::{AddressError, IpAddr};
use crate::config::Hints;

/// Description of `EAI_NONAME` for errors raised without consulting
/// the system resolver.
const NO_NAME: &str = "Name or service not known";

/// Error reported by the name-resolution service.
///
/// Carries an `EAI_*` code and the resolver's description of it.
#[derive(Debug)]
pub struct ResolveError {
    code: i32,
    inner: io::Error,
}

impl ResolveError {
    /// Returns a `ResolveError` indicating that the name is not known.
    pub fn no_name() -> ResolveError {
        ResolveError{
            code: libc::EAI_NONAME,
            inner: io::Error::new(io::ErrorKind::NotFound, NO_NAME),
        }
    }

    /// Returns the `EAI_*` code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the resolver's description of the error.
    pub fn description(&self) -> String {
        self.inner.to_string()
    }
}

impl From<LookupError> for ResolveError {
    fn from(err: LookupError) -> ResolveError {
        ResolveError{
            code: err.error_num(),
            // Carries the `gai_strerror` text, or the OS error for `EAI_SYSTEM`
            inner: io::Error::from(err),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl error::Error for ResolveError {}

/// Resolves `host` with the system resolver.
///
/// No service is requested; the name is passed through unchanged.
pub fn getaddrinfo(host: &str, hints: &Hints) -> Result<AddrInfoList, ResolveError> {
    let iter = dns_lookup::getaddrinfo(Some(host), None, Some(hints.to_addrinfo_hints()))?;
    Ok(AddrInfoList{inner: iter})
}

/// Sequence of records returned by a single `getaddrinfo` call, in
/// resolver order.
///
/// The underlying list is released with `freeaddrinfo` when this value
/// is dropped, whether or not it was iterated to the end.
pub struct AddrInfoList {
    inner: AddrInfoIter,
}

impl Iterator for AddrInfoList {
    type Item = Result<IpAddr, AddressError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(record_address)
    }
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        debug!("releasing address list");
    }
}

impl fmt::Debug for AddrInfoList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("AddrInfoList")
    }
}

fn record_address(record: io::Result<AddrInfo>) -> Result<IpAddr, AddressError> {
    record.map(|info| IpAddr::from(info.sockaddr.ip())).map_err(AddressError::from)
}

#[cfg(test)]
mod test {
    use std::io;

    use super::{getaddrinfo, record_address, ResolveError};
    use crate::address::IpAddr;
    use crate::config::{default_hints, AddrFamily};

    #[test]
    fn test_numeric_v4() {
        let addrs = getaddrinfo("93.184.216.34", &default_hints()).unwrap()
            .map(|r| r.unwrap())
            .collect::<Vec<_>>();

        assert_eq!(addrs, [IpAddr::V4([93, 184, 216, 34])]);
    }

    #[test]
    fn test_numeric_v6() {
        let addrs = getaddrinfo("::1", &default_hints()).unwrap()
            .map(|r| r.unwrap())
            .collect::<Vec<_>>();

        let mut loopback = [0; 16];
        loopback[15] = 1;
        assert_eq!(addrs, [IpAddr::V6(loopback)]);
    }

    #[test]
    fn test_family_mismatch() {
        let mut hints = default_hints();
        hints.family = AddrFamily::Inet6;

        let err = getaddrinfo("127.0.0.1", &hints).unwrap_err();
        assert_ne!(err.code(), 0);
        assert!(!err.description().is_empty());
    }

    #[test]
    fn test_error_description() {
        let err = ResolveError::no_name();

        assert_eq!(err.code(), libc::EAI_NONAME);
        assert_eq!(err.to_string(), err.description());
        assert!(!err.description().is_empty());
    }

    #[test]
    fn test_record_error() {
        let bad = Err(io::Error::new(io::ErrorKind::InvalidInput, "expected IPv4 or IPv6 socket"));
        let err = record_address(bad).unwrap_err();

        assert_eq!(err.to_string(), "expected IPv4 or IPv6 socket");
    }
}
