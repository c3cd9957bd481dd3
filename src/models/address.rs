//! Integer representation of addresses.
//!
//! Every address is carried as a `u128` holding `max` significant bits (32 for
//! IPv4, 128 for IPv6). The helpers here convert between that integer and the
//! byte, limb and bit-string forms, and compute masks for a prefix length.

use crate::error::NetError;
use std::fmt;
use std::hash::Hash;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family marker implemented for [`Ipv4Addr`] and [`Ipv6Addr`].
pub trait AddressFamily:
    Copy
    + fmt::Debug
    + fmt::Display
    + Eq
    + Ord
    + Hash
    + FromStr<Err = AddrParseError>
    + Send
    + Sync
    + 'static
{
    /// Width of the address in bits, which is also the longest prefix.
    const MAX_PREFIX: u8;
    /// Width of the address in bytes.
    const BYTES: usize;
    /// Width of one limb: octets for IPv4, 16-bit groups for IPv6.
    const LIMB_BITS: u8;
    /// Short family name used in messages.
    const NAME: &'static str;

    /// Integer value of the address.
    fn to_u128(self) -> u128;

    /// Builds an address from the low `MAX_PREFIX` bits of `bits`.
    fn from_u128(bits: u128) -> Self;

    /// Wraps the address in [`IpAddr`].
    fn to_ip(self) -> IpAddr;
}

impl AddressFamily for Ipv4Addr {
    const MAX_PREFIX: u8 = 32;
    const BYTES: usize = 4;
    const LIMB_BITS: u8 = 8;
    const NAME: &'static str = "IPv4";

    #[inline]
    fn to_u128(self) -> u128 {
        u32::from(self) as u128
    }

    #[inline]
    fn from_u128(bits: u128) -> Self {
        Ipv4Addr::from(bits as u32)
    }

    #[inline]
    fn to_ip(self) -> IpAddr {
        IpAddr::V4(self)
    }
}

impl AddressFamily for Ipv6Addr {
    const MAX_PREFIX: u8 = 128;
    const BYTES: usize = 16;
    const LIMB_BITS: u8 = 16;
    const NAME: &'static str = "IPv6";

    #[inline]
    fn to_u128(self) -> u128 {
        u128::from(self)
    }

    #[inline]
    fn from_u128(bits: u128) -> Self {
        Ipv6Addr::from(bits)
    }

    #[inline]
    fn to_ip(self) -> IpAddr {
        IpAddr::V6(self)
    }
}

/// Integer with the lowest `n` bits set.
#[inline]
pub fn low_ones(n: u8) -> u128 {
    if n >= 128 {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}

/// Largest address value of a `max`-bit family.
#[inline]
pub fn max_value(max: u8) -> u128 {
    low_ones(max)
}

/// Netmask for prefix `len` within a `max`-bit address, `len <= max` assumed.
#[inline]
pub fn cidr_mask(len: u8, max: u8) -> u128 {
    max_value(max) & !low_ones(max - len)
}

/// Host mask (inverse netmask) for prefix `len` within a `max`-bit address.
#[inline]
pub fn host_mask(len: u8, max: u8) -> u128 {
    low_ones(max - len)
}

/// Clears the host bits of `bits`, giving the network address.
#[inline]
pub fn cut_addr(bits: u128, len: u8, max: u8) -> u128 {
    bits & cidr_mask(len, max)
}

/// Sets the host bits of `bits`, giving the highest address of the block.
#[inline]
pub fn broadcast_addr(bits: u128, len: u8, max: u8) -> u128 {
    cut_addr(bits, len, max) | host_mask(len, max)
}

/// Shortest prefix for which `bits` is still a network address.
pub fn lo_mask(bits: u128, max: u8) -> u8 {
    let trailing_zeros = bits.trailing_zeros().min(max as u32) as u8;
    max - trailing_zeros
}

/// Checks that `value` fits a `max`-bit address.
pub fn check_value(value: u128, max: u8) -> Result<u128, NetError> {
    if value > max_value(max) {
        Err(NetError::IntegerOutOfRange { value, bits: max })
    } else {
        Ok(value)
    }
}

/// Big-endian bytes of a `width`-byte address.
pub fn to_be_bytes(bits: u128, width: usize) -> Vec<u8> {
    let all = bits.to_be_bytes();
    all[all.len() - width..].to_vec()
}

/// Reads a big-endian buffer of exactly `width` bytes.
pub fn from_be_bytes(buf: &[u8], width: usize) -> Result<u128, NetError> {
    if buf.len() != width {
        return Err(NetError::InvalidByteLength {
            expected: width,
            actual: buf.len(),
        });
    }
    Ok(buf.iter().fold(0u128, |acc, b| (acc << 8) | *b as u128))
}

/// Splits an address into limbs of `limb_bits` bits, most significant first.
pub fn to_limbs(bits: u128, max: u8, limb_bits: u8) -> Vec<u16> {
    let count = max / limb_bits;
    let limb_mask = low_ones(limb_bits);
    (0..count)
        .rev()
        .map(|i| ((bits >> (i as u32 * limb_bits as u32)) & limb_mask) as u16)
        .collect()
}

/// Joins limbs of `limb_bits` bits, most significant first.
///
/// Each limb is truncated to `limb_bits`.
pub fn from_limbs(limbs: &[u16], limb_bits: u8) -> u128 {
    let limb_mask = low_ones(limb_bits);
    limbs
        .iter()
        .fold(0u128, |acc, l| (acc << limb_bits) | (*l as u128 & limb_mask))
}

/// Zero-padded binary rendering of a `max`-bit value.
pub fn to_bit_string(bits: u128, max: u8) -> String {
    format!("{bits:0width$b}", width = max as usize)
}

/// Parses a binary string of at most `max` digits.
pub fn from_bit_string(text: &str, max: u8) -> Result<u128, NetError> {
    if text.is_empty() || text.len() > max as usize {
        return Err(NetError::InvalidAddress(text.to_string()));
    }
    u128::from_str_radix(text, 2).map_err(|_| NetError::InvalidAddress(text.to_string()))
}
