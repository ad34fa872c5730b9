//! Command-line driver for the `resolve` binary

use std::ffi::OsString;
use std::io::{self, Write};

use crate::config::Hints;
use crate::error::Error;
use crate::resolver::Resolve;

/// Outcome of a completed run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Number of addresses printed
    pub printed: usize,
    /// Number of records that could not be presented
    pub failed: usize,
}

/// Runs one resolution: `args` must hold the program name followed by
/// exactly one host name.
///
/// The status line and addresses are written to `out`; per-record
/// presentation errors are written to `err` and do not fail the run.
/// Fatal errors are returned for the caller to report.
pub fn run<R, H, O, E>(args: &[OsString], local_hostname: H, resolver: &R,
        out: &mut O, err: &mut E) -> Result<Summary, Error>
        where R: Resolve, H: FnOnce() -> io::Result<String>, O: Write, E: Write {
    let target = match args {
        [_, target] => target,
        _ => {
            let program = args.first()
                .map_or_else(|| "resolve".to_owned(), |s| s.to_string_lossy().into_owned());
            return Err(Error::Usage{program: program});
        }
    };

    let local = local_hostname().map_err(Error::Hostname)?;

    writeln!(out, "Resolving '{}' from '{}':", target.to_string_lossy(), local)?;

    let records = resolver.resolve(target, &Hints::default())?;
    let mut summary = Summary::default();

    for record in records {
        match record {
            Ok(addr) => {
                debug!("{} address {}", addr.family(), addr);
                writeln!(out, "IP Address: {}", addr.present())?;
                summary.printed += 1;
            }
            Err(e) => {
                warn!("skipping record: {}", e);
                writeln!(err, "inet_ntop: {}", e)?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
