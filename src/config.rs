//! Resolution request configuration

use std::fmt;

use dns_lookup::{AddrInfoHints, Protocol, SockType};

use crate::address::IpAddr;

/// Address family requested from, or reported by, the resolver.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AddrFamily {
    /// Any family (`AF_UNSPEC`)
    Unspecified,
    /// IPv4 (`AF_INET`)
    Inet,
    /// IPv6 (`AF_INET6`)
    Inet6,
}

impl AddrFamily {
    /// Converts an `AddrFamily` to its `AF_*` value.
    pub fn to_raw(&self) -> i32 {
        match *self {
            AddrFamily::Unspecified => libc::AF_UNSPEC,
            AddrFamily::Inet => libc::AF_INET,
            AddrFamily::Inet6 => libc::AF_INET6,
        }
    }

    /// Returns whether an address of family `other` satisfies this filter.
    pub fn admits(&self, other: AddrFamily) -> bool {
        *self == AddrFamily::Unspecified || *self == other
    }
}

impl fmt::Display for AddrFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            AddrFamily::Unspecified => "unspecified",
            AddrFamily::Inet => "IPv4",
            AddrFamily::Inet6 => "IPv6",
        })
    }
}

/// Request configuration passed along with a host name to a resolver
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Hints {
    /// Families permitted in the results
    pub family: AddrFamily,
    /// Raw `SOCK_*` hint; `0` accepts any
    pub socktype: i32,
    /// Raw `IPPROTO_*` hint; `0` accepts any
    pub protocol: i32,
    /// Raw `AI_*` flags
    pub flags: i32,
}

impl Hints {
    /// Returns whether `addr` passes the family filter.
    pub fn admits(&self, addr: &IpAddr) -> bool {
        self.family.admits(addr.family())
    }

    /// Converts to the hints structure handed to `getaddrinfo`.
    pub fn to_addrinfo_hints(&self) -> AddrInfoHints {
        AddrInfoHints{
            flags: self.flags,
            address: self.family.to_raw(),
            socktype: self.socktype,
            protocol: self.protocol,
        }
    }
}

impl Default for Hints {
    /// Any family, stream sockets over TCP, no flags.
    fn default() -> Hints {
        Hints{
            family: AddrFamily::Unspecified,
            socktype: SockType::Stream.into(),
            protocol: Protocol::TCP.into(),
            flags: 0,
        }
    }
}

/// Returns the request configuration used by `resolve_host`.
pub fn default_hints() -> Hints {
    Hints::default()
}

#[cfg(test)]
mod test {
    use super::{default_hints, AddrFamily};
    use crate::address::IpAddr;

    #[test]
    fn test_default_hints() {
        let hints = default_hints();

        assert_eq!(hints.family, AddrFamily::Unspecified);
        assert_eq!(hints.socktype, libc::SOCK_STREAM);
        assert_eq!(hints.protocol, libc::IPPROTO_TCP);
        assert_eq!(hints.flags, 0);

        let raw = hints.to_addrinfo_hints();
        assert_eq!(raw.address, libc::AF_UNSPEC);
        assert_eq!(raw.socktype, libc::SOCK_STREAM);
        assert_eq!(raw.protocol, libc::IPPROTO_TCP);
        assert_eq!(raw.flags, 0);
    }

    #[test]
    fn test_family_filter() {
        let v4 = IpAddr::V4([127, 0, 0, 1]);
        let v6 = IpAddr::V6([0; 16]);

        let mut hints = default_hints();
        assert!(hints.admits(&v4));
        assert!(hints.admits(&v6));

        hints.family = AddrFamily::Inet6;
        assert!(!hints.admits(&v4));
        assert!(hints.admits(&v6));
        assert_eq!(hints.to_addrinfo_hints().address, libc::AF_INET6);
    }
}
