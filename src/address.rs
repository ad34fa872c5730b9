//! IP address types

use std::error;
use std::fmt;
use std::io;
use std::net::{self, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::config::AddrFamily;

/// Length of a buffer sufficient for the text form of any IPv6 address,
/// including a terminating NUL.
pub const INET6_ADDRSTRLEN: usize = 46;

/// Representation of an IPv4 or IPv6 address as returned by a resolver
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum IpAddr {
    /// An IPv4 address, in network byte order
    V4([u8; 4]),
    /// An IPv6 address, in network byte order
    V6([u8; 16]),
}

impl IpAddr {
    /// Returns the address family of this address.
    pub fn family(&self) -> AddrFamily {
        match *self {
            IpAddr::V4(_) => AddrFamily::Inet,
            IpAddr::V6(_) => AddrFamily::Inet6,
        }
    }

    /// Returns the raw address bytes.
    pub fn octets(&self) -> &[u8] {
        match *self {
            IpAddr::V4(ref b) => b,
            IpAddr::V6(ref b) => b,
        }
    }

    /// Returns the presentation form of the address: dotted-decimal for IPv4,
    /// compressed colon-hex for IPv6. The result never exceeds
    /// `INET6_ADDRSTRLEN - 1` bytes.
    pub fn present(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IpAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IpAddr::V4(b) => fmt::Display::fmt(&Ipv4Addr::from(b), f),
            IpAddr::V6(b) => fmt::Display::fmt(&Ipv6Addr::from(b), f),
        }
    }
}

impl From<net::IpAddr> for IpAddr {
    fn from(addr: net::IpAddr) -> IpAddr {
        match addr {
            net::IpAddr::V4(a) => IpAddr::V4(a.octets()),
            net::IpAddr::V6(a) => IpAddr::V6(a.octets()),
        }
    }
}

impl From<IpAddr> for net::IpAddr {
    fn from(addr: IpAddr) -> net::IpAddr {
        match addr {
            IpAddr::V4(b) => net::IpAddr::V4(b.into()),
            IpAddr::V6(b) => net::IpAddr::V6(b.into()),
        }
    }
}

/// Signals an error in parsing an `IpAddr`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid IP address syntax")
    }
}

impl error::Error for ParseError {}

impl FromStr for IpAddr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<IpAddr, ParseError> {
        s.parse::<net::IpAddr>().map(IpAddr::from).map_err(|_| ParseError)
    }
}

/// Signals that a resolved record could not be presented as an `IpAddr`,
/// e.g. because its address family is neither IPv4 nor IPv6.
#[derive(Debug)]
pub struct AddressError(io::Error);

impl AddressError {
    /// Returns the underlying error.
    pub fn get_ref(&self) -> &io::Error {
        &self.0
    }
}

impl From<io::Error> for AddressError {
    fn from(err: io::Error) -> AddressError {
        AddressError(err)
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl error::Error for AddressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod test {
    use std::io;
    use std::net::{Ipv4Addr, Ipv6Addr};
    use super::{IpAddr, AddressError, INET6_ADDRSTRLEN};
    use crate::config::AddrFamily;

    #[test]
    fn test_ip_addr() {
        assert_eq!("127.0.0.1".parse::<IpAddr>().unwrap(), IpAddr::V4([127, 0, 0, 1]));
        assert_eq!("::1".parse::<IpAddr>().unwrap(),
            IpAddr::V6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1).octets()));
        assert!("localhost".parse::<IpAddr>().is_err());

        assert_eq!(IpAddr::V4([127, 0, 0, 1]).family(), AddrFamily::Inet);
        assert_eq!(IpAddr::V6([0; 16]).family(), AddrFamily::Inet6);
        assert_eq!(IpAddr::V4([10, 1, 2, 3]).octets(), &[10, 1, 2, 3]);
    }

    #[test]
    fn test_present() {
        assert_eq!(IpAddr::V4([93, 184, 216, 34]).present(), "93.184.216.34");
        assert_eq!(IpAddr::V4(Ipv4Addr::UNSPECIFIED.octets()).present(), "0.0.0.0");

        let v6 = "2606:2800:220:1:248:1893:25c8:1946".parse::<IpAddr>().unwrap();
        assert_eq!(v6.present(), "2606:2800:220:1:248:1893:25c8:1946");

        let v6 = IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0x567, 0x89ab).octets());
        assert_eq!(v6.present(), "2001:db8::567:89ab");
        assert_eq!(IpAddr::V6([0; 16]).present(), "::");
    }

    #[test]
    fn test_present_fits_buffer() {
        let widest = IpAddr::V6([0xfe; 16]).present();
        assert_eq!(widest, "fefe:fefe:fefe:fefe:fefe:fefe:fefe:fefe");
        assert!(widest.len() < INET6_ADDRSTRLEN);

        let mapped = "::ffff:255.255.255.255".parse::<IpAddr>().unwrap();
        assert!(mapped.present().len() < INET6_ADDRSTRLEN);
    }

    #[test]
    fn test_std_conversion() {
        let std_addr: std::net::IpAddr = "192.0.2.5".parse().unwrap();
        let addr = IpAddr::from(std_addr);

        assert_eq!(addr, IpAddr::V4([192, 0, 2, 5]));
        assert_eq!(std::net::IpAddr::from(addr), std_addr);
    }

    #[test]
    fn test_address_error() {
        let e = AddressError::from(io::Error::new(io::ErrorKind::InvalidInput,
            "expected IPv4 or IPv6 socket"));

        assert_eq!(e.to_string(), "expected IPv4 or IPv6 socket");
        assert_eq!(e.get_ref().kind(), io::ErrorKind::InvalidInput);
    }
}
