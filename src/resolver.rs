//! High-level resolver operations

use std::ffi::OsStr;

use crate::address::{AddressError, IpAddr};
use crate::addrinfo::{getaddrinfo, AddrInfoList, ResolveError};
use crate::config::{default_hints, Hints};

/// Resolves host names to a sequence of address records.
pub trait Resolve {
    /// Records produced by one resolution, in resolver order.
    ///
    /// Any resources held by the sequence are released when it is dropped.
    type Records: IntoIterator<Item = Result<IpAddr, AddressError>>;

    /// Resolves `host` according to `hints`.
    fn resolve(&self, host: &OsStr, hints: &Hints) -> Result<Self::Records, ResolveError>;
}

/// Resolves names through the system's `getaddrinfo`.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemResolver;

impl Resolve for SystemResolver {
    type Records = AddrInfoList;

    fn resolve(&self, host: &OsStr, hints: &Hints) -> Result<AddrInfoList, ResolveError> {
        // A name that cannot be handed over verbatim is never rewritten.
        let name = match host.to_str() {
            Some(s) if !s.is_empty() && !s.contains('\0') => s,
            _ => {
                info!("cannot look up {:?}", host);
                return Err(ResolveError::no_name());
            }
        };

        info!("attempting lookup of name \"{}\"", name);

        getaddrinfo(name, hints)
    }
}

/// Resolves a hostname to one or more IPv4 or IPv6 addresses.
///
/// # Example
///
/// ```no_run
/// use resolve::resolve_host;
///
/// # fn _foo() -> Result<(), resolve::ResolveError> {
/// for addr in resolve_host("rust-lang.org")?.flatten() {
///     println!("found address: {}", addr);
/// }
/// # Ok(())
/// # }
/// ```
pub fn resolve_host(host: &str) -> Result<AddrInfoList, ResolveError> {
    SystemResolver.resolve(OsStr::new(host), &default_hints())
}
