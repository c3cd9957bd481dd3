//! IPv4-only helpers on [`Ipv4Network`].
//!
//! Classification follows the well-known ranges; everything else lives on the
//! generic [`Network`](super::Network).

use super::address::AddressFamily;
use super::prefix::Prefix;
use super::{Ipv4Network, Ipv6Network};
use crate::error::NetError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Prefix of the IPv4-mapped IPv6 block `::ffff:0:0/96`.
pub const MAPPED_PREFIX_LEN: u8 = 96;

/// Private ranges from RFC 1918.
const PRIVATE_RANGES: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

fn within(net: &Ipv4Network, block: Ipv4Addr, len: u8) -> bool {
    Ipv4Network::new(block, len)
        .map(|b| b.include(net))
        .unwrap_or(false)
}

impl Ipv4Network {
    /// Builds a network from an address and a dotted netmask.
    pub fn from_addr_netmask(addr: Ipv4Addr, netmask: &str) -> Result<Self, NetError> {
        let prefix = Prefix::from_netmask(netmask)?;
        Ipv4Network::with_prefix(addr, prefix)
            .map_err(|_| NetError::InvalidNetmask(netmask.to_string()))
    }

    pub fn octets(&self) -> [u8; 4] {
        self.addr().octets()
    }

    /// Dotted-decimal netmask, e.g. `255.255.255.0` for a `/24`.
    pub fn netmask_string(&self) -> String {
        self.prefix().to_netmask_string()
    }

    /// Whole network lies inside `10/8`, `172.16/12` or `192.168/16`.
    pub fn is_private(&self) -> bool {
        PRIVATE_RANGES
            .iter()
            .any(|(block, len)| within(self, *block, *len))
    }

    pub fn is_loopback(&self) -> bool {
        within(self, Ipv4Addr::new(127, 0, 0, 0), 8)
    }

    pub fn is_multicast(&self) -> bool {
        within(self, Ipv4Addr::new(224, 0, 0, 0), 4)
    }

    pub fn is_link_local(&self) -> bool {
        within(self, Ipv4Addr::new(169, 254, 0, 0), 16)
    }

    /// Same network inside `::ffff:0:0/96`.
    pub fn to_mapped_v6(&self) -> Ipv6Network {
        Ipv6Network::mapped(*self)
    }

    /// Reverse lookup name under `in-addr.arpa`.
    ///
    /// Every octet the prefix reaches is listed, a partial one included, so
    /// `/24` drops the host octet and `/12` keeps two. `/0` keeps the first.
    pub fn reverse_dns(&self) -> String {
        let whole = ((self.prefix_len() as usize + 7) / 8).max(1);
        let octets = self.network().octets();
        let mut labels: Vec<String> = octets[..whole.min(4)]
            .iter()
            .rev()
            .map(|o| o.to_string())
            .collect();
        labels.push("in-addr.arpa".to_string());
        labels.join(".")
    }
}

/// IPv4-mapped IPv6 address for `addr`.
pub(crate) fn mapped_bits(addr: Ipv4Addr) -> u128 {
    Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0, 0).to_u128() | addr.to_u128()
}
