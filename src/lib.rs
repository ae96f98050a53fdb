//! netcider - network addressing calculator for IPv4 CIDR blocks.
//!
//! Parses `A.B.C.D/P` notation and derives the network address, broadcast
//! address, masks, host range and counts; optionally enumerates every
//! address in the block for tools without CIDR support.

pub mod cli;
pub mod models;
pub mod output;

pub use models::{AddrRange, Cidr, FormatError, NetworkSummary};

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

/// Initialize logging from `log4rs.yml`, falling back to a plain stderr
/// appender at warn level when no config file is present.
pub fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .expect("Error building log4rs config");
    // A second init in the same process is fine to ignore.
    let _ = log4rs::init_config(config);
}
