//! Domain models for network arithmetic.
//!
//! This module contains the value types used throughout the crate:
//! - [`Prefix`] - prefix length bounded by the family width
//! - [`Network`] - address plus prefix, generic over the family
//! - [`IpNetwork`] - either family behind one type
//! - [`address`] - integer, byte, limb and bit-string conversions

pub mod address;
mod ip;
mod ipv4;
mod ipv6;
mod network;
mod parse;
mod prefix;

use std::net::{Ipv4Addr, Ipv6Addr};

// Re-export public types
pub use address::AddressFamily;
pub use ip::IpNetwork;
pub use ipv4::MAPPED_PREFIX_LEN;
pub use network::{Network, Subnets};
pub use prefix::{block_size, Prefix, SubPrefix, IPV4_MAX, IPV6_MAX};

/// IPv4 network, e.g. `172.16.10.1/24`.
pub type Ipv4Network = Network<Ipv4Addr>;
/// IPv6 network, e.g. `2001:db8::8:800:200c:417a/64`.
pub type Ipv6Network = Network<Ipv6Addr>;
