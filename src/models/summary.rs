//! Network statistics derived from a CIDR block.

use crate::models::{AddrRange, Cidr};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Addressing statistics for a single CIDR block.
///
/// Computed once by [`NetworkSummary::from_cidr`] and read-only afterwards.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSummary {
    /// The block as given, host bits intact.
    pub cidr: Cidr,
    /// Subnet mask for the prefix.
    pub netmask: Ipv4Addr,
    /// Wildcard mask, the inverse of the subnet mask.
    pub wildcard: Ipv4Addr,
    /// Lowest address in the block (host bits zero).
    pub network: Ipv4Addr,
    /// Highest address in the block (host bits one).
    pub broadcast: Ipv4Addr,
    /// Lowest assignable address.
    pub host_min: Ipv4Addr,
    /// Highest assignable address.
    pub host_max: Ipv4Addr,
    /// Every address in the block, network and broadcast included.
    pub total_addresses: u64,
    /// Assignable addresses, per the /31 and /32 conventions below.
    pub usable_hosts: u64,
}

impl NetworkSummary {
    /// Compute the statistics for a block.
    ///
    /// Host-range conventions:
    /// * /31 is a point-to-point pair (RFC 3021): both addresses usable,
    ///   no network/broadcast reservation.
    /// * /32 names a single interface: host min and max collapse onto the
    ///   address itself and the usable count is 0.
    /// * Everything wider reserves the network and broadcast addresses.
    pub fn from_cidr(cidr: Cidr) -> NetworkSummary {
        let network = cidr.network();
        let broadcast = cidr.broadcast();
        let total_addresses = cidr.size();

        let (host_min, host_max, usable_hosts) = match cidr.prefix {
            32 => (network, broadcast, 0),
            31 => (network, broadcast, 2),
            _ => (
                Ipv4Addr::from(u32::from(network) + 1),
                Ipv4Addr::from(u32::from(broadcast) - 1),
                total_addresses.saturating_sub(2),
            ),
        };

        NetworkSummary {
            cidr,
            netmask: cidr.netmask(),
            wildcard: cidr.wildcard(),
            network,
            broadcast,
            host_min,
            host_max,
            total_addresses,
            usable_hosts,
        }
    }

    /// Lazy iterator over every address in the block, network to broadcast.
    pub fn addresses(&self) -> AddrRange {
        AddrRange::new(self.network, self.broadcast)
    }
}
