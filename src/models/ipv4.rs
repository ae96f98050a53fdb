//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Cidr`] struct for representing an IPv4 address with a
//! prefix length, along with the mask arithmetic every summary is built on.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // Strict A.B.C.D/P shape, all components decimal. Range checks happen
    // after the match so out-of-range octets get a precise message.
    static ref CIDR_RE: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})/(\d{1,2})$").expect("Invalid Regex");
}

/// Error raised when a string does not describe a valid IPv4 CIDR block.
///
/// This is the only failure mode in the crate; every operation on an
/// already-parsed [`Cidr`] is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError(String);

impl FormatError {
    pub(crate) fn new(msg: impl Into<String>) -> FormatError {
        FormatError(msg.into())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid CIDR: {}", self.0)
    }
}

impl std::error::Error for FormatError {}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netcider::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32, FormatError> {
    if len > MAX_LENGTH {
        Err(FormatError::new(format!("prefix /{len} is out of range (0-32)")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Wildcard (inverse) mask for a prefix length.
pub fn wildcard_mask(len: u8) -> Result<u32, FormatError> {
    Ok(!prefix_mask(len)?)
}

/// Network address for a given IP and prefix length: host bits cleared.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, FormatError> {
    let mask = prefix_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Broadcast address for a given IP and prefix length: host bits set.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, FormatError> {
    let mask = prefix_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Total number of addresses in a block of the given prefix length,
/// network and broadcast included. A /0 holds 2^32 addresses, hence u64.
pub fn block_size(len: u8) -> Result<u64, FormatError> {
    if len > MAX_LENGTH {
        Err(FormatError::new(format!("prefix /{len} is out of range (0-32)")))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// An IPv4 address with its CIDR prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as given, host bits intact.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}

impl Cidr {
    /// Parse a CIDR string such as `192.168.0.2/24`.
    ///
    /// Fails with [`FormatError`] on anything other than a well-formed
    /// dotted quad, a single `/`, and a prefix in 0-32.
    pub fn new(addr_cidr: &str) -> Result<Cidr, FormatError> {
        let addr_cidr = addr_cidr.trim();
        let caps = CIDR_RE
            .captures(addr_cidr)
            .ok_or_else(|| FormatError::new(format!("expected A.B.C.D/P, got {addr_cidr:?}")))?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let field = &caps[i + 1];
            *octet = field
                .parse()
                .map_err(|_| FormatError::new(format!("octet {field} is out of range (0-255)")))?;
        }

        // The shape regex caps the prefix at two digits, so u8 always fits.
        let prefix: u8 = caps[5]
            .parse()
            .map_err(|_| FormatError::new(format!("prefix {} is not a number", &caps[5])))?;
        if prefix > MAX_LENGTH {
            return Err(FormatError::new(format!(
                "prefix /{prefix} is out of range (0-32)"
            )));
        }

        Ok(Cidr {
            addr: Ipv4Addr::from(octets),
            prefix,
        })
    }

    /// Subnet mask with the top `prefix` bits set.
    pub fn netmask(&self) -> Ipv4Addr {
        let mask = prefix_mask(self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating netmask for {self}: {e}"));
        Ipv4Addr::from(mask)
    }

    /// Wildcard mask, the bitwise inverse of the netmask.
    pub fn wildcard(&self) -> Ipv4Addr {
        let mask = wildcard_mask(self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating wildcard for {self}: {e}"));
        Ipv4Addr::from(mask)
    }

    /// Get the lowest (network) address in the block.
    pub fn network(&self) -> Ipv4Addr {
        network_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating network address for {self}: {e}"))
    }

    /// Get the highest (broadcast) address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {self}: {e}"))
    }

    /// Total number of addresses in the block.
    pub fn size(&self) -> u64 {
        block_size(self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating block size for {self}: {e}"))
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network() && ip <= self.broadcast()
    }
}

impl FromStr for Cidr {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Cidr, FormatError> {
        Cidr::new(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
