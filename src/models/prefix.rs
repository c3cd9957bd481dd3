//! Prefix length (number of network bits) shared by both families.

use super::address::{cidr_mask, to_bit_string};
use crate::error::NetError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Longest IPv4 prefix.
pub const IPV4_MAX: u8 = 32;
/// Longest IPv6 prefix.
pub const IPV6_MAX: u8 = 128;

/// Number of addresses in a block with `host_len` host bits.
///
/// A 128-bit host part holds 2^128 addresses which does not fit `u128`; that
/// single case saturates to `u128::MAX`.
#[inline]
pub fn block_size(host_len: u8) -> u128 {
    if host_len >= 128 {
        u128::MAX
    } else {
        1u128 << host_len
    }
}

/// Prefix length of a network, bounded by the family width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix {
    len: u8,
    max: u8,
}

/// Result of [`Prefix::sub_prefix`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubPrefix {
    /// The longer prefix.
    pub prefix: Prefix,
    /// Addresses per block at the longer prefix.
    pub block_size: u128,
    /// Blocks at the longer prefix inside one block at the current prefix.
    pub count: u128,
}

impl Prefix {
    /// Builds a prefix of `len` bits for a `max`-bit family.
    pub fn new(len: u8, max: u8) -> Result<Prefix, NetError> {
        if len > max {
            Err(NetError::PrefixOutOfRange {
                len: len as u32,
                max,
            })
        } else {
            Ok(Prefix { len, max })
        }
    }

    /// IPv4 prefix.
    pub fn v4(len: u8) -> Result<Prefix, NetError> {
        Prefix::new(len, IPV4_MAX)
    }

    /// IPv6 prefix.
    pub fn v6(len: u8) -> Result<Prefix, NetError> {
        Prefix::new(len, IPV6_MAX)
    }

    /// Caller guarantees `len <= max`.
    #[inline]
    pub(crate) const fn new_unchecked(len: u8, max: u8) -> Prefix {
        Prefix { len, max }
    }

    /// Converts a mask integer of a `max`-bit family into a prefix.
    ///
    /// The mask must be a contiguous run of ones followed by zeros.
    pub fn from_mask_bits(mask: u128, max: u8) -> Result<Prefix, NetError> {
        let invalid = || NetError::InvalidNetmask(format!("{mask:#x}"));
        if max == 0 || max > IPV6_MAX || (max < IPV6_MAX && mask >> max != 0) {
            return Err(invalid());
        }
        let aligned = mask << (IPV6_MAX - max);
        let len = aligned.leading_ones();
        if aligned.checked_shl(len).unwrap_or(0) == 0 {
            Ok(Prefix::new_unchecked(len as u8, max))
        } else {
            Err(invalid())
        }
    }

    /// Parses a netmask such as `255.255.255.0` (or an IPv6 mask) into a prefix.
    pub fn from_netmask(text: &str) -> Result<Prefix, NetError> {
        let invalid = || NetError::InvalidNetmask(text.to_string());
        let (mask, max) = match text.trim().parse::<IpAddr>().map_err(|_| invalid())? {
            IpAddr::V4(mask) => (u32::from(mask) as u128, IPV4_MAX),
            IpAddr::V6(mask) => (u128::from(mask), IPV6_MAX),
        };
        Prefix::from_mask_bits(mask, max).map_err(|_| invalid())
    }

    /// Number of network bits.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.len
    }

    /// Family width in bits.
    #[inline]
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Number of host bits.
    #[inline]
    pub const fn host_len(&self) -> u8 {
        self.max - self.len
    }

    /// Mask integer of width `max`.
    #[inline]
    pub fn to_u128(&self) -> u128 {
        cidr_mask(self.len, self.max)
    }

    /// `len` ones followed by `host_len` zeros.
    pub fn bit_pattern(&self) -> String {
        to_bit_string(self.to_u128(), self.max)
    }

    /// Dotted-decimal mask for IPv4, colon-hex mask for IPv6.
    pub fn to_netmask_string(&self) -> String {
        if self.max == IPV4_MAX {
            Ipv4Addr::from(self.to_u128() as u32).to_string()
        } else {
            Ipv6Addr::from(self.to_u128()).to_string()
        }
    }

    /// Prefix `n` bits longer.
    pub fn sum(&self, n: u8) -> Result<Prefix, NetError> {
        let len = self.len as u32 + n as u32;
        if len > self.max as u32 {
            return Err(NetError::PrefixOutOfRange { len, max: self.max });
        }
        Ok(Prefix::new_unchecked(len as u8, self.max))
    }

    /// Absolute difference between two prefix lengths.
    #[inline]
    pub fn difference(&self, other: Prefix) -> u8 {
        self.len.abs_diff(other.len)
    }

    /// Prefix one bit longer, `None` at the family width.
    pub fn next(&self) -> Option<Prefix> {
        self.sum(1).ok()
    }

    /// Shorter prefix for supernetting.
    ///
    /// `target` must be below the current length; negative targets clamp to 0.
    /// A `/0` has no shorter prefix, so every target fails.
    pub fn super_prefix(&self, target: i32) -> Result<Prefix, NetError> {
        if self.len == 0 || target >= self.len as i32 {
            return Err(NetError::NewPrefixOutOfRange {
                target,
                min: 0,
                max: self.len as i32 - 1,
            });
        }
        Ok(Prefix::new_unchecked(target.max(0) as u8, self.max))
    }

    /// Relaxed [`Prefix::super_prefix`]: `None` when no shorter prefix applies.
    pub fn checked_super_prefix(&self, target: i32) -> Option<Prefix> {
        self.super_prefix(target).ok()
    }

    /// Longer prefix for subnetting, within `len..=max`.
    pub fn sub_prefix(&self, target: i32) -> Result<SubPrefix, NetError> {
        if target < self.len as i32 || target > self.max as i32 {
            return Err(NetError::NewPrefixOutOfRange {
                target,
                min: self.len as i32,
                max: self.max as i32,
            });
        }
        let prefix = Prefix::new_unchecked(target as u8, self.max);
        Ok(SubPrefix {
            prefix,
            block_size: block_size(prefix.host_len()),
            count: block_size(prefix.len - self.len),
        })
    }

    /// Relaxed [`Prefix::sub_prefix`].
    pub fn checked_sub_prefix(&self, target: i32) -> Option<SubPrefix> {
        self.sub_prefix(target).ok()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len)
    }
}
