//! Domain models for the CIDR calculator.
//!
//! This module contains the core data structures:
//! - [`Cidr`] - IPv4 address with a CIDR prefix length
//! - [`NetworkSummary`] - addressing statistics derived from a block
//! - [`AddrRange`] - lazy enumeration of every address in a block

mod ipv4;
mod range;
mod summary;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, network_addr, prefix_mask, wildcard_mask, Cidr, FormatError,
    MAX_LENGTH,
};
pub use range::AddrRange;
pub use summary::NetworkSummary;
