extern crate dns_lookup;
extern crate env_logger;
#[macro_use] extern crate log;
extern crate resolve;

use std::env::args_os;
use std::io::{stderr, stdout};
use std::process::exit;

use dns_lookup::get_hostname;
use env_logger::{Builder, Env};
use log::LevelFilter;

use resolve::cli::run;
use resolve::SystemResolver;

fn main() {
    // Silent unless RESOLVE_LOG is set
    Builder::new()
        .filter_level(LevelFilter::Off)
        .parse_env(Env::new().filter("RESOLVE_LOG"))
        .init();

    let args = args_os().collect::<Vec<_>>();

    match run(&args, get_hostname, &SystemResolver, &mut stdout().lock(), &mut stderr().lock()) {
        Ok(summary) => {
            debug!("printed {} addresses, {} unpresentable",
                summary.printed, summary.failed);
        }
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
