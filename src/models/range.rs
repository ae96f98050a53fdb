//! Lazy enumeration of every address in a block.

use crate::models::Cidr;
use std::net::Ipv4Addr;

/// Inclusive iterator from network to broadcast, ascending.
///
/// Addresses are produced on demand, so a /0 block streams all 2^32
/// of them without ever materializing a container. The iterator is a
/// pure function of its bounds; constructing it again restarts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddrRange {
    next: u32,
    end: u32,
    done: bool,
}

impl AddrRange {
    /// Iterate `start..=end`. An inverted pair yields nothing.
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> AddrRange {
        AddrRange {
            next: u32::from(start),
            end: u32::from(end),
            done: u32::from(start) > u32::from(end),
        }
    }

    /// Number of addresses not yet produced.
    pub fn remaining(&self) -> u64 {
        if self.done {
            0
        } else {
            u64::from(self.end - self.next) + 1
        }
    }
}

impl From<Cidr> for AddrRange {
    fn from(cidr: Cidr) -> AddrRange {
        AddrRange::new(cidr.network(), cidr.broadcast())
    }
}

impl Iterator for AddrRange {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.done {
            return None;
        }
        let addr = Ipv4Addr::from(self.next);
        if self.next == self.end {
            // The upper bound is inclusive and may be 255.255.255.255,
            // which has no successor in u32; flag instead of incrementing.
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(addr)
    }
}
