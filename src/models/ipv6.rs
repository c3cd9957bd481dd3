//! IPv6-only helpers on [`Ipv6Network`].
//!
//! The special kinds of IPv6 network (unspecified, loopback, IPv4-mapped) are
//! plain [`Ipv6Network`] values built by named constructors and recognised by
//! predicates.

use super::address::cut_addr;
use super::ipv4::{mapped_bits, MAPPED_PREFIX_LEN};
use super::{Ipv4Network, Ipv6Network, Network};
use std::net::{Ipv4Addr, Ipv6Addr};

impl Ipv6Network {
    /// `::/128`.
    pub fn unspecified() -> Self {
        Network::host(Ipv6Addr::UNSPECIFIED)
    }

    /// `::1/128`.
    pub fn loopback() -> Self {
        Network::host(Ipv6Addr::LOCALHOST)
    }

    /// Embeds an IPv4 network in `::ffff:0:0/96`, shifting its prefix by 96.
    pub fn mapped(v4: Ipv4Network) -> Self {
        Network::from_bits(
            mapped_bits(v4.addr()),
            MAPPED_PREFIX_LEN + v4.prefix_len(),
        )
    }

    /// The eight 16-bit groups of the address.
    pub fn groups(&self) -> [u16; 8] {
        self.addr().segments()
    }

    pub fn is_unspecified(&self) -> bool {
        *self == Ipv6Network::unspecified()
    }

    pub fn is_loopback(&self) -> bool {
        *self == Ipv6Network::loopback()
    }

    /// Top 96 bits are `::ffff:0:0`.
    pub fn is_mapped(&self) -> bool {
        cut_addr(self.to_u128(), MAPPED_PREFIX_LEN, 128) == mapped_bits(Ipv4Addr::UNSPECIFIED)
    }

    /// Inside `fe80::/10`.
    pub fn is_link_local(&self) -> bool {
        self.prefix_len() >= 10 && cut_addr(self.to_u128(), 10, 128) == 0xfe80 << 112
    }

    /// Inside `fc00::/7`.
    pub fn is_unique_local(&self) -> bool {
        self.prefix_len() >= 7 && cut_addr(self.to_u128(), 7, 128) == 0xfc00 << 112
    }

    /// IPv4 view of a mapped network; prefix is `len - 96`, or 0 below 96.
    pub fn mapped_v4(&self) -> Option<Ipv4Network> {
        if !self.is_mapped() {
            return None;
        }
        let len = self.prefix_len().saturating_sub(MAPPED_PREFIX_LEN);
        Some(Network::from_bits(
            self.to_u128() & u32::MAX as u128,
            len,
        ))
    }

    /// Reverse lookup name under `ip6.arpa`, one label per nibble.
    ///
    /// Every nibble the prefix reaches is listed, a partial one included, so
    /// `/32` gives eight labels and `/33` nine. `/0` keeps the first.
    pub fn reverse_dns(&self) -> String {
        let nibbles = ((self.prefix_len() as usize + 3) / 4).max(1);
        let bits = self.network_u128();
        let mut labels: Vec<String> = (0..nibbles)
            .rev()
            .map(|i| format!("{:x}", (bits >> (124 - 4 * i)) & 0xf))
            .collect();
        labels.push("ip6.arpa".to_string());
        labels.join(".")
    }
}
