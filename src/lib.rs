//! Host name resolution through the system resolver.
//!
//! A host name is handed to `getaddrinfo` and every returned address is
//! rendered in its canonical textual form. The `resolve` binary wraps this
//! in a small command-line driver (see the `cli` module).

#![deny(missing_docs)]

extern crate dns_lookup;
extern crate libc;
#[macro_use] extern crate log;

pub use self::address::{AddressError, IpAddr, ParseError, INET6_ADDRSTRLEN};
pub use self::addrinfo::{getaddrinfo, AddrInfoList, ResolveError};
pub use self::config::{default_hints, AddrFamily, Hints};
pub use self::error::Error;
pub use self::hosts::{Host, HostTable};
pub use self::resolver::{resolve_host, Resolve, SystemResolver};

pub mod address;
pub mod addrinfo;
pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod resolver;
