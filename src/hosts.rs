//! Implements parsing the hosts file format to produce a host table

use std::ffi::OsStr;
use std::io;
use std::vec::IntoIter;

use crate::address::{AddressError, IpAddr};
use crate::addrinfo::ResolveError;
use crate::config::Hints;
use crate::resolver::Resolve;

/// Represents a host table, consisting of addresses mapped to names.
///
/// A `HostTable` is also a resolver: names are answered from the table
/// alone, in table order, without consulting the system.
#[derive(Clone, Debug, Default)]
pub struct HostTable {
    /// Contained hosts
    pub hosts: Vec<Host>,
}

impl HostTable {
    /// Returns the addresses of all hosts matching the given name,
    /// in table order.
    pub fn find_addresses(&self, name: &str) -> Vec<IpAddr> {
        self.hosts.iter()
            .filter(|h| h.matches(name))
            .map(|h| h.address)
            .collect()
    }
}

impl Resolve for HostTable {
    type Records = IntoIter<Result<IpAddr, AddressError>>;

    fn resolve(&self, host: &OsStr, hints: &Hints) -> Result<Self::Records, ResolveError> {
        let host = host.to_str().ok_or_else(ResolveError::no_name)?;
        let found = self.find_addresses(host).into_iter()
            .filter(|addr| hints.admits(addr))
            .map(Ok)
            .collect::<Vec<_>>();

        if found.is_empty() {
            return Err(ResolveError::no_name());
        }

        Ok(found.into_iter())
    }
}

/// Represents a single host within a host table.
#[derive(Clone, Debug)]
pub struct Host {
    /// Host address
    pub address: IpAddr,
    /// Canonical host name
    pub name: String,
    /// Host aliases
    pub aliases: Vec<String>,
}

impl Host {
    /// Returns whether `name` is this host's name or one of its aliases.
    /// Comparison ignores ASCII case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) ||
            self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Attempts to parse a host table in the hosts file format.
pub fn parse_host_table(data: &str) -> io::Result<HostTable> {
    let mut hosts = Vec::new();

    for line in data.lines() {
        let mut line = line;

        if let Some(pos) = line.find('#') {
            line = &line[..pos];
        }

        let mut words = line.split_whitespace();

        let addr_str = match words.next() {
            Some(w) => w,
            None => continue,
        };

        let addr = match addr_str.parse() {
            Ok(addr) => addr,
            Err(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid address: {}", addr_str),
                ))
            }
        };

        let name = match words.next() {
            Some(w) => w,
            None => return Err(io::Error::new(io::ErrorKind::InvalidData, "missing names")),
        };

        hosts.push(Host {
            address: addr,
            name: name.to_owned(),
            aliases: words.map(|s| s.to_owned()).collect(),
        });
    }

    Ok(HostTable { hosts })
}
