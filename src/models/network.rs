//! Network address: an address value together with its prefix length.
//!
//! [`Network`] is generic over the address family so the arithmetic is
//! written once for IPv4 and IPv6. All operations are pure; every
//! transformation returns a new value.

use super::address::{self, AddressFamily};
use super::parse::split_cidr;
use super::prefix::{block_size, Prefix};
use crate::error::NetError;
use crate::processing::range::{cover_range, AddressRange};
use crate::processing::{split, subtract, summarize};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// Address plus prefix length.
///
/// Ordered by address value first and prefix length second, so a network
/// sorts before a more specific network sharing its address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network<A> {
    addr: A,
    prefix: Prefix,
}

/// Exact block size as `(high, low)` so that 2^128 is representable.
fn exact_size(host_len: u8) -> (u128, u128) {
    if host_len >= 128 {
        (1, 0)
    } else {
        (0, 1u128 << host_len)
    }
}

impl<A: AddressFamily> Network<A> {
    /// Builds a network from an address and a prefix length.
    pub fn new(addr: A, len: u8) -> Result<Self, NetError> {
        Ok(Network {
            addr,
            prefix: Prefix::new(len, A::MAX_PREFIX)?,
        })
    }

    /// Builds a network from an address and an existing prefix of the same family.
    pub fn with_prefix(addr: A, prefix: Prefix) -> Result<Self, NetError> {
        if Prefix::max(&prefix) != A::MAX_PREFIX {
            return Err(NetError::FamilyMismatch);
        }
        Ok(Network { addr, prefix })
    }

    /// Single-address network (`/32` or `/128`).
    pub fn host(addr: A) -> Self {
        Network::from_bits(addr.to_u128(), A::MAX_PREFIX)
    }

    /// Caller guarantees `len <= A::MAX_PREFIX`.
    #[inline]
    pub(crate) fn from_bits(bits: u128, len: u8) -> Self {
        Network {
            addr: A::from_u128(bits),
            prefix: Prefix::new_unchecked(len, A::MAX_PREFIX),
        }
    }

    /// Builds a network from an integer address value.
    pub fn from_u128(value: u128, len: u8) -> Result<Self, NetError> {
        let value = address::check_value(value, A::MAX_PREFIX)?;
        Network::new(A::from_u128(value), len)
    }

    /// Builds a network from a big-endian buffer of exactly 4 or 16 bytes.
    pub fn from_bytes(buf: &[u8], len: u8) -> Result<Self, NetError> {
        let value = address::from_be_bytes(buf, A::BYTES)?;
        Network::new(A::from_u128(value), len)
    }

    #[inline]
    pub fn addr(&self) -> A {
        self.addr
    }

    #[inline]
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    #[inline]
    pub fn prefix_len(&self) -> u8 {
        self.prefix.value()
    }

    /// Integer value of the address.
    #[inline]
    pub fn to_u128(&self) -> u128 {
        self.addr.to_u128()
    }

    /// Big-endian bytes of the address.
    pub fn to_bytes(&self) -> Vec<u8> {
        address::to_be_bytes(self.to_u128(), A::BYTES)
    }

    /// Octets (IPv4) or 16-bit groups (IPv6) of the address.
    pub fn limbs(&self) -> Vec<u16> {
        address::to_limbs(self.to_u128(), A::MAX_PREFIX, A::LIMB_BITS)
    }

    /// Binary rendering of the address.
    pub fn bits(&self) -> String {
        address::to_bit_string(self.to_u128(), A::MAX_PREFIX)
    }

    pub fn netmask(&self) -> A {
        A::from_u128(self.prefix.to_u128())
    }

    pub fn hostmask(&self) -> A {
        A::from_u128(address::host_mask(self.prefix_len(), A::MAX_PREFIX))
    }

    /// Lowest address value of the block.
    #[inline]
    pub fn network_u128(&self) -> u128 {
        address::cut_addr(self.to_u128(), self.prefix_len(), A::MAX_PREFIX)
    }

    /// Highest address value of the block.
    #[inline]
    pub fn broadcast_u128(&self) -> u128 {
        address::broadcast_addr(self.to_u128(), self.prefix_len(), A::MAX_PREFIX)
    }

    /// The network itself with host bits cleared.
    pub fn network(&self) -> Self {
        if self.is_network() {
            *self
        } else {
            Network::from_bits(self.network_u128(), self.prefix_len())
        }
    }

    /// Highest address of the block, same prefix.
    ///
    /// IPv6 has no broadcast, but the last address of the span is still useful.
    pub fn broadcast(&self) -> Self {
        Network::from_bits(self.broadcast_u128(), self.prefix_len())
    }

    /// True when the address has no host bits set.
    pub fn is_network(&self) -> bool {
        self.to_u128() == self.network_u128()
    }

    /// Number of addresses in the block; `::/0` saturates to `u128::MAX`.
    pub fn size(&self) -> u128 {
        block_size(self.prefix.host_len())
    }

    /// Checks whether `addr` lies inside the block.
    pub fn contains(&self, addr: A) -> bool {
        address::cut_addr(addr.to_u128(), self.prefix_len(), A::MAX_PREFIX) == self.network_u128()
    }

    /// Checks whether `other` is the same or a more specific network inside `self`.
    pub fn include(&self, other: &Self) -> bool {
        self.prefix_len() <= other.prefix_len() && self.contains(other.addr)
    }

    /// Checks [`Network::include`] for every network of `others`.
    pub fn include_all(&self, others: &[Self]) -> bool {
        others.iter().all(|o| self.include(o))
    }

    /// Checks that `others` are all included and that their sizes add up to `self`.
    ///
    /// This is a size check: overlapping inputs whose sizes happen to sum
    /// correctly are accepted.
    pub fn include_exactly(&self, others: &[Self]) -> bool {
        if !self.include_all(others) {
            return false;
        }
        let total = others.iter().fold((0u128, 0u128), |(hi, lo), o| {
            let (o_hi, o_lo) = exact_size(o.prefix.host_len());
            let (lo, carry) = lo.overflowing_add(o_lo);
            (hi + o_hi + carry as u128, lo)
        });
        total == exact_size(self.prefix.host_len())
    }

    /// Checks whether the spans of `self` and `other` intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(other.broadcast_u128() < self.network_u128()
            || other.network_u128() > self.broadcast_u128())
    }

    /// Checks whether any of `others` intersects `self`.
    pub fn overlap(&self, others: &[Self]) -> bool {
        others.iter().any(|o| self.overlaps(o))
    }

    /// Lazily yields the blocks of prefix `new_len` partitioning this network.
    pub fn subnets(&self, new_len: u8) -> Result<Subnets<A>, NetError> {
        let sub = self.prefix.sub_prefix(new_len as i32)?;
        Ok(Subnets {
            next: self.network_u128(),
            last: self.broadcast_u128(),
            len: sub.prefix.value(),
            done: false,
            _family: std::marker::PhantomData,
        })
    }

    /// The two blocks one bit longer, or `None` for a single address.
    pub fn halves(&self) -> Option<[Self; 2]> {
        let len = self.prefix.next()?.value();
        let low = self.network_u128();
        let high = low | 1u128 << (A::MAX_PREFIX - len);
        Some([Network::from_bits(low, len), Network::from_bits(high, len)])
    }

    /// Evenly sized blocks of prefix `new_len`, lowest first.
    ///
    /// The result holds `2^(new_len - len)` networks; bound the delta first.
    pub fn subnet(&self, new_len: u8) -> Result<Vec<Self>, NetError> {
        Ok(self.subnets(new_len)?.collect())
    }

    /// Network covering `self` at the shorter prefix `new_len`.
    ///
    /// Negative values clamp to 0.
    pub fn supernet(&self, new_len: i32) -> Result<Self, NetError> {
        let prefix = self.prefix.super_prefix(new_len)?;
        Ok(Network::from_bits(
            address::cut_addr(self.to_u128(), prefix.value(), A::MAX_PREFIX),
            prefix.value(),
        ))
    }

    /// Relaxed [`Network::supernet`]: `None` when `new_len` is not shorter.
    pub fn checked_supernet(&self, new_len: i32) -> Option<Self> {
        self.supernet(new_len).ok()
    }

    /// The supernet one bit shorter, if it is made of exactly `self` and `others`.
    pub fn exact_supernet(&self, others: &[Self]) -> Option<Self> {
        let candidate = self.checked_supernet(self.prefix_len() as i32 - 1)?;
        let mut members = Vec::with_capacity(others.len() + 1);
        members.push(*self);
        members.extend_from_slice(others);
        candidate.include_exactly(&members).then_some(candidate)
    }

    /// Single aggregation step: `self` if it already covers `others`,
    /// otherwise [`Network::exact_supernet`].
    pub fn proper_supernet(&self, others: &[Self]) -> Option<Self> {
        if self.include_all(others) {
            Some(*self)
        } else {
            self.exact_supernet(others)
        }
    }

    /// Splits the network into exactly `count` blocks.
    ///
    /// Uneven counts produce blocks of different sizes, the larger ones last.
    pub fn split(&self, count: u128) -> Result<Vec<Self>, NetError> {
        split::split_network(self, count)
    }

    /// Same address with a different prefix length.
    pub fn new_prefix(&self, len: u8) -> Result<Self, NetError> {
        Network::new(self.addr, len)
    }

    /// Absolute difference of the address values, prefixes ignored.
    pub fn distance(&self, other: &Self) -> u128 {
        self.to_u128().abs_diff(other.to_u128())
    }

    /// Address at offset `index` from the network address, same prefix.
    ///
    /// Negative indices count from the end of the span (`-1` is the last
    /// address). Returns `None` outside the span.
    pub fn at(&self, index: i128) -> Option<Self> {
        let last_offset = address::host_mask(self.prefix_len(), A::MAX_PREFIX);
        let offset = if index >= 0 {
            index as u128
        } else {
            last_offset.checked_sub(index.unsigned_abs() - 1)?
        };
        if offset > last_offset {
            return None;
        }
        Some(Network::from_bits(
            self.network_u128() + offset,
            self.prefix_len(),
        ))
    }

    /// Address right after the network address.
    pub fn first(&self) -> Option<Self> {
        self.at(1)
    }

    /// Second-to-last address of the span, for both families.
    pub fn last(&self) -> Option<Self> {
        self.at(-2)
    }

    /// Next address with the same prefix, `None` past the end of the address space.
    pub fn successor(&self) -> Option<Self> {
        let next = self.to_u128().checked_add(1)?;
        address::check_value(next, A::MAX_PREFIX)
            .ok()
            .map(|bits| Network::from_bits(bits, self.prefix_len()))
    }

    /// Previous address with the same prefix.
    pub fn predecessor(&self) -> Option<Self> {
        let prev = self.to_u128().checked_sub(1)?;
        Some(Network::from_bits(prev, self.prefix_len()))
    }

    /// Lazily yields every address of the span clamped to `[first, last]`.
    pub fn each(&self, first: Option<A>, last: Option<A>) -> AddressRange<A> {
        let lo = first
            .map(|f| f.to_u128().max(self.network_u128()))
            .unwrap_or(self.network_u128());
        let hi = last
            .map(|l| l.to_u128().min(self.broadcast_u128()))
            .unwrap_or(self.broadcast_u128());
        AddressRange::new(lo, hi, self.prefix)
    }

    /// Every address of the span.
    pub fn iter(&self) -> AddressRange<A> {
        self.each(None, None)
    }

    /// The span without its first and last address.
    pub fn each_host(&self) -> AddressRange<A> {
        if self.prefix.host_len() < 2 {
            return AddressRange::empty(self.prefix);
        }
        AddressRange::new(
            self.network_u128() + 1,
            self.broadcast_u128() - 1,
            self.prefix,
        )
    }

    /// Fewest networks covering the addresses from `self` up to `other`.
    ///
    /// Returns `[self]` unless `other` sorts after `self`.
    pub fn range(&self, other: &Self) -> Vec<Self> {
        if other <= self {
            return vec![*self];
        }
        cover_range(self.to_u128(), other.to_u128())
    }

    /// Summarizes `self` together with `others`.
    pub fn summarize_with(&self, others: &[Self]) -> Vec<Self> {
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(*self);
        all.extend_from_slice(others);
        summarize::summarize(&all)
    }

    /// Removes every address of `others` from `self`.
    pub fn subtract(&self, others: &[Self]) -> Vec<Self> {
        subtract::subtract(std::slice::from_ref(self), others)
    }
}

impl<A: AddressFamily> fmt::Display for Network<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl<A: AddressFamily> FromStr for Network<A> {
    type Err = NetError;

    /// Accepts `addr`, `addr/len` and `addr/netmask`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (addr_text, prefix_text) = split_cidr(text)?;
        let addr: A = addr_text
            .parse()
            .map_err(|_| NetError::InvalidAddress(text.trim().to_string()))?;
        match prefix_text {
            None => Ok(Network::host(addr)),
            Some(p) if p.bytes().all(|b| b.is_ascii_digit()) => {
                let len: u32 = p
                    .parse()
                    .map_err(|_| NetError::InvalidAddress(text.trim().to_string()))?;
                if len > A::MAX_PREFIX as u32 {
                    return Err(NetError::PrefixOutOfRange {
                        len,
                        max: A::MAX_PREFIX,
                    });
                }
                Network::new(addr, len as u8)
            }
            Some(mask) => {
                let prefix = Prefix::from_netmask(mask)?;
                Network::with_prefix(addr, prefix)
                    .map_err(|_| NetError::InvalidNetmask(mask.to_string()))
            }
        }
    }
}

impl<A: AddressFamily> Serialize for Network<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, A: AddressFamily> Deserialize<'de> for Network<A> {
    fn deserialize<D>(deserializer: D) -> Result<Network<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid network '{s}': {e}")))
    }
}

/// Lazy iterator returned by [`Network::subnets`].
#[derive(Clone, Debug)]
pub struct Subnets<A> {
    next: u128,
    last: u128,
    len: u8,
    done: bool,
    _family: std::marker::PhantomData<A>,
}

impl<A: AddressFamily> Iterator for Subnets<A> {
    type Item = Network<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let block = Network::from_bits(self.next, self.len);
        let hi = block.broadcast_u128();
        if hi >= self.last {
            self.done = true;
        } else {
            self.next = hi + 1;
        }
        Some(block)
    }
}

impl<A: AddressFamily> FusedIterator for Subnets<A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Ipv4Network, Ipv6Network};
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn v4(text: &str) -> Ipv4Network {
        text.parse().unwrap()
    }

    fn v6(text: &str) -> Ipv6Network {
        text.parse().unwrap()
    }

    fn strings(nets: &[Ipv4Network]) -> Vec<String> {
        nets.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_bounds() {
        let ip = v4("172.16.10.1/24");
        assert_eq!(ip.network().to_string(), "172.16.10.0/24");
        assert_eq!(ip.broadcast().to_string(), "172.16.10.255/24");
        assert!(!ip.is_network());
        assert!(ip.network().is_network());
        assert_eq!(ip.size(), 256);
        assert_eq!(ip.netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(ip.hostmask(), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(v4("10.0.0.0/0").size(), 1 << 32);
        assert_eq!(v6("::/0").size(), u128::MAX);
        assert_eq!(v6("::/0").broadcast_u128(), u128::MAX);
        assert_eq!(v6("2001:db8::8:800:200c:417a/64").size(), 1 << 64);
    }

    #[test]
    fn test_codecs() {
        let ip = v4("172.16.10.1/24");
        assert_eq!(ip.to_u128(), 2886732289);
        assert_eq!(Ipv4Network::from_u128(2886732289, 24).unwrap(), ip);
        assert_eq!(ip.to_bytes(), vec![172, 16, 10, 1]);
        assert_eq!(Ipv4Network::from_bytes(&[172, 16, 10, 1], 24).unwrap(), ip);
        assert_eq!(ip.limbs(), vec![172, 16, 10, 1]);
        assert_eq!(ip.bits(), "10101100000100000000101000000001");

        let err = Ipv4Network::from_bytes(&[1, 2, 3, 4, 5], 24).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        let err = Ipv4Network::from_u128(1 << 32, 24).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        let ip6 = v6("2001:db8::8:800:200c:417a/64");
        assert_eq!(
            Ipv6Network::from_u128(ip6.to_u128(), 64).unwrap(),
            ip6
        );
        assert_eq!(Ipv6Network::from_bytes(&ip6.to_bytes(), 64).unwrap(), ip6);
    }

    #[test]
    fn test_round_trip_integers() {
        for text in ["0.0.0.0/0", "10.1.2.3/8", "255.255.255.255/32", "192.168.0.9/30"] {
            let net = v4(text);
            assert_eq!(
                Ipv4Network::from_u128(net.to_u128(), net.prefix_len()).unwrap(),
                net
            );
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(v4("10.0.0.1").to_string(), "10.0.0.1/32");
        assert_eq!(v4("10.0.0.1/255.255.0.0").to_string(), "10.0.0.1/16");
        assert_eq!(v4(" 10.0.0.1/8 ").to_string(), "10.0.0.1/8");
        assert_eq!(
            v6("2001:0db8:0000:0000:0008:0800:200c:417a/64").to_string(),
            "2001:db8::8:800:200c:417a/64"
        );
        assert_eq!(v6("::1").to_string(), "::1/128");

        let err = "10.0.0.1/33".parse::<Ipv4Network>().unwrap_err();
        assert_eq!(err, NetError::PrefixOutOfRange { len: 33, max: 32 });
        let err = "10.0.0.1/255.0.255.0".parse::<Ipv4Network>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!("10.0.0.256/8".parse::<Ipv4Network>().is_err());
        assert!("::1/64".parse::<Ipv4Network>().is_err());
        assert!("10.0.0.1/ffff::".parse::<Ipv4Network>().is_err());
        assert!("".parse::<Ipv4Network>().is_err());
    }

    #[test]
    fn test_serde() {
        let net = v4("10.0.0.1/24");
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"10.0.0.1/24\"");
        let back: Ipv4Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<Ipv4Network>("\"10.0.0.1/40\"").is_err());
    }

    #[test]
    fn test_ordering() {
        let mut nets = vec![v4("172.16.1.1/14"), v4("10.1.1.1/16"), v4("10.1.1.1/8")];
        nets.sort();
        assert_eq!(strings(&nets), vec!["10.1.1.1/8", "10.1.1.1/16", "172.16.1.1/14"]);
        assert!(v4("10.0.0.0/8") < v4("10.0.0.0/16"));
        assert_eq!(v4("10.0.0.1/24"), v4("10.0.0.1/24"));
        assert_ne!(v4("10.0.0.1/24"), v4("10.0.0.0/24"));
    }

    #[test]
    fn test_include() {
        let ip = v4("10.0.0.0/8");
        assert!(ip.include(&v4("10.1.1.1/32")));
        assert!(ip.include(&v4("10.1.1.1/9")));
        assert!(!ip.include(&v4("172.16.0.0/16")));
        assert!(!ip.include(&v4("10.0.0.0/7")));
        assert!(!ip.include(&v4("11.0.0.0/8")));
        assert!(ip.include(&ip));
        assert!(ip.contains(Ipv4Addr::new(10, 255, 255, 255)));
        assert!(!ip.contains(Ipv4Addr::new(11, 0, 0, 0)));

        let ip6 = v6("2001:db8::8:800:200c:417a/64");
        assert!(ip6.include(&v6("2001:db8::8:800:200c:1/128")));
        assert!(!ip6.include(&v6("2001:db8::8:800:200c:417a/76").supernet(32).unwrap()));
        assert!(ip6.include(&v6("2001:db8::8:800:200c:417a/76")));
    }

    #[test]
    fn test_include_all_and_exactly() {
        let ip = v4("192.168.0.0/24");
        let halves = [v4("192.168.0.0/25"), v4("192.168.0.128/25")];
        assert!(ip.include_all(&halves));
        assert!(ip.include_exactly(&halves));
        assert!(!ip.include_exactly(&halves[..1]));
        assert!(!ip.include_all(&[v4("192.168.1.0/25")]));
        // size check only: two copies of the same half pass
        assert!(ip.include_exactly(&[halves[0], halves[0]]));

        let all = v6("::/0");
        let halves6 = [v6("::/1"), v6("8000::/1")];
        assert!(all.include_exactly(&halves6));
        assert!(!all.include_exactly(&halves6[1..]));
    }

    #[test]
    fn test_overlap() {
        let ip = v4("10.0.0.0/24");
        assert!(ip.overlap(&[v4("10.0.0.128/25")]));
        assert!(ip.overlap(&[v4("10.0.0.0/8")]));
        assert!(!ip.overlap(&[v4("10.0.1.0/24"), v4("9.255.255.255/32")]));
        assert!(ip.overlap(&[v4("10.0.1.0/24"), v4("10.0.0.255/32")]));
    }

    #[test]
    fn test_subnet() {
        let ip = v4("172.16.10.1/24");
        let subnets = ip.subnet(26).unwrap();
        assert_eq!(
            strings(&subnets),
            vec![
                "172.16.10.0/26",
                "172.16.10.64/26",
                "172.16.10.128/26",
                "172.16.10.192/26"
            ]
        );
        assert_eq!(ip.subnet(24).unwrap(), vec![ip.network()]);
        assert_eq!(ip.subnet(23).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(ip.subnet(33).unwrap_err().kind(), ErrorKind::Range);
        for len in 24..=32 {
            let total: u128 = ip.subnets(len).unwrap().map(|n| n.size()).sum();
            assert_eq!(total, ip.size());
        }

        let top = v4("255.255.255.0/24").subnet(25).unwrap();
        assert_eq!(strings(&top), vec!["255.255.255.0/25", "255.255.255.128/25"]);

        let mut halves = v6("::/0").subnets(1).unwrap();
        assert_eq!(halves.next(), Some(v6("::/1")));
        assert_eq!(halves.next(), Some(v6("8000::/1")));
        assert_eq!(halves.next(), None);
    }

    #[test]
    fn test_supernet() {
        let ip = v4("172.16.10.1/24");
        assert_eq!(ip.supernet(22).unwrap().to_string(), "172.16.8.0/22");
        assert_eq!(ip.supernet(0).unwrap().to_string(), "0.0.0.0/0");
        assert_eq!(ip.supernet(-2).unwrap().to_string(), "0.0.0.0/0");
        assert_eq!(ip.supernet(24).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(ip.supernet(25).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(ip.checked_supernet(25), None);
        assert_eq!(
            v6("2001:db8::8:800:200c:417a/64").supernet(32).unwrap().to_string(),
            "2001:db8::/32"
        );
    }

    #[test]
    fn test_exact_and_proper_supernet() {
        let a = v4("10.0.0.0/24");
        let b = v4("10.0.1.0/24");
        let c = v4("10.0.2.0/24");
        assert_eq!(a.exact_supernet(&[b]), Some(v4("10.0.0.0/23")));
        assert_eq!(b.exact_supernet(&[c]), None);
        assert_eq!(a.exact_supernet(&[v4("10.0.1.0/25")]), None);
        assert_eq!(v4("10.0.0.0/8").proper_supernet(&[a, b]), Some(v4("10.0.0.0/8")));
        assert_eq!(a.proper_supernet(&[b]), Some(v4("10.0.0.0/23")));
        assert_eq!(a.proper_supernet(&[c]), None);
    }

    #[test]
    fn test_supernet_of_whole_space() {
        let all4 = v4("0.0.0.0/0");
        assert_eq!(all4.supernet(-1).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(all4.supernet(0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(all4.checked_supernet(-1), None);
        assert_eq!(all4.exact_supernet(&[]), None);
        assert_eq!(all4.proper_supernet(&[v4("10.0.0.0/8")]), Some(all4));

        let all6 = v6("::/0");
        assert_eq!(all6.supernet(-1).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(all6.exact_supernet(&[]), None);
        assert_eq!(v6("::/1").exact_supernet(&[v6("8000::/1")]), Some(all6));
    }

    #[test]
    fn test_halves() {
        let [low, high] = v4("10.0.0.0/8").halves().unwrap();
        assert_eq!(low, v4("10.0.0.0/9"));
        assert_eq!(high, v4("10.128.0.0/9"));
        let [low, high] = v6("::/0").halves().unwrap();
        assert_eq!(low, v6("::/1"));
        assert_eq!(high, v6("8000::/1"));
        assert_eq!(v4("10.0.0.1/32").halves(), None);
        assert_eq!(v6("::1/128").halves(), None);
    }

    #[test]
    fn test_new_prefix_and_distance() {
        let ip = v4("10.0.0.5/24");
        assert_eq!(ip.new_prefix(16).unwrap().to_string(), "10.0.0.5/16");
        assert_eq!(ip.new_prefix(40).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(ip.distance(&v4("10.0.1.5/8")), 256);
        assert_eq!(v4("10.0.1.5/8").distance(&ip), 256);
    }

    #[test]
    fn test_at_first_last() {
        let ip = v4("192.168.100.50/24");
        assert_eq!(ip.first().unwrap().to_string(), "192.168.100.1/24");
        assert_eq!(ip.last().unwrap().to_string(), "192.168.100.254/24");
        assert_eq!(ip.at(0).unwrap().to_string(), "192.168.100.0/24");
        assert_eq!(ip.at(-1).unwrap().to_string(), "192.168.100.255/24");
        assert_eq!(ip.at(-256).unwrap().to_string(), "192.168.100.0/24");
        assert_eq!(ip.at(256), None);
        assert_eq!(ip.at(-257), None);

        let single = v4("10.0.0.1/32");
        assert_eq!(single.first(), None);
        assert_eq!(single.last(), None);

        let ip6 = v6("2001:db8::8:800:200c:417a/64");
        assert_eq!(ip6.first().unwrap().to_string(), "2001:db8::1/64");
        assert_eq!(
            ip6.last().unwrap().to_string(),
            "2001:db8::ffff:ffff:ffff:fffe/64"
        );
        assert_eq!(v6("::/0").at(-1).unwrap().to_u128(), u128::MAX);
    }

    #[test]
    fn test_successor_predecessor() {
        assert_eq!(v4("10.0.0.255/24").successor().unwrap().to_string(), "10.0.1.0/24");
        assert_eq!(v4("255.255.255.255/32").successor(), None);
        assert_eq!(v4("10.0.1.0/24").predecessor().unwrap().to_string(), "10.0.0.255/24");
        assert_eq!(v4("0.0.0.0/0").predecessor(), None);
        assert_eq!(v6("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff").successor(), None);
    }

    #[test]
    fn test_each() {
        let ip = v4("10.0.0.1/29");
        let all: Vec<String> = ip.iter().map(|n| n.to_string()).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], "10.0.0.0/29");
        assert_eq!(all[7], "10.0.0.7/29");

        let hosts: Vec<Ipv4Addr> = ip.each_host().map(|n| n.addr()).collect();
        assert_eq!(hosts.len(), 6);
        assert_eq!(hosts[0], Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(hosts[5], Ipv4Addr::new(10, 0, 0, 6));

        let clamped: Vec<Ipv4Addr> = ip
            .each(Some(Ipv4Addr::new(10, 0, 0, 5)), Some(Ipv4Addr::new(10, 0, 1, 0)))
            .map(|n| n.addr())
            .collect();
        assert_eq!(
            clamped,
            vec![
                Ipv4Addr::new(10, 0, 0, 5),
                Ipv4Addr::new(10, 0, 0, 6),
                Ipv4Addr::new(10, 0, 0, 7),
            ]
        );

        assert_eq!(v4("10.0.0.0/31").each_host().count(), 0);
        assert_eq!(v4("10.0.0.0/32").each_host().count(), 0);
        assert_eq!(v4("10.0.0.0/32").iter().count(), 1);

        // lazy: only the first few of 2^64 addresses are produced
        let first: Vec<Ipv6Addr> = v6("2001:db8::/64")
            .iter()
            .take(2)
            .map(|n| n.addr())
            .collect();
        let expected: Vec<Ipv6Addr> = vec![
            "2001:db8::".parse().unwrap(),
            "2001:db8::1".parse().unwrap(),
        ];
        assert_eq!(first, expected);
    }

    #[test]
    fn test_range() {
        let from = v4("10.0.0.1/32");
        let to = v4("10.0.0.10/32");
        assert_eq!(
            strings(&from.range(&to)),
            vec!["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/30", "10.0.0.8/31", "10.0.0.10/32"]
        );
        assert_eq!(to.range(&from), vec![to]);
        assert_eq!(from.range(&from), vec![from]);
        assert_eq!(
            strings(&v4("10.0.0.0/32").range(&v4("10.0.3.255/32"))),
            vec!["10.0.0.0/22"]
        );
    }

    #[test]
    fn test_summarize_with_and_subtract() {
        let a = v4("172.16.10.1/24");
        assert_eq!(strings(&a.summarize_with(&[v4("172.16.11.2/24")])), vec!["172.16.10.0/23"]);
        assert_eq!(
            strings(&v4("10.0.0.0/8").subtract(&[v4("10.0.0.0/9")])),
            vec!["10.128.0.0/9"]
        );
    }
}
