//! Family-agnostic network: either an [`Ipv4Network`] or an [`Ipv6Network`].

use super::parse::looks_like_v6;
use super::{Ipv4Network, Ipv6Network, Prefix};
use crate::error::NetError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// IPv4 or IPv6 network.
///
/// All IPv4 values sort before all IPv6 values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpNetwork {
    V4(Ipv4Network),
    V6(Ipv6Network),
}

/// Applies the same expression to whichever family is held.
macro_rules! dispatch {
    ($self:expr, $net:ident => $body:expr) => {
        match $self {
            IpNetwork::V4($net) => $body,
            IpNetwork::V6($net) => $body,
        }
    };
}

impl IpNetwork {
    /// Builds a network from any address and a prefix length.
    pub fn new(addr: IpAddr, len: u8) -> Result<Self, NetError> {
        match addr {
            IpAddr::V4(a) => Ok(IpNetwork::V4(Ipv4Network::new(a, len)?)),
            IpAddr::V6(a) => Ok(IpNetwork::V6(Ipv6Network::new(a, len)?)),
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpNetwork::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, IpNetwork::V6(_))
    }

    /// Short family name, `IPv4` or `IPv6`.
    pub fn family(&self) -> &'static str {
        match self {
            IpNetwork::V4(_) => "IPv4",
            IpNetwork::V6(_) => "IPv6",
        }
    }

    pub fn addr(&self) -> IpAddr {
        dispatch!(self, n => IpAddr::from(n.addr()))
    }

    pub fn prefix(&self) -> Prefix {
        dispatch!(self, n => n.prefix())
    }

    pub fn prefix_len(&self) -> u8 {
        dispatch!(self, n => n.prefix_len())
    }

    pub fn to_u128(&self) -> u128 {
        dispatch!(self, n => n.to_u128())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        dispatch!(self, n => n.to_bytes())
    }

    pub fn bits(&self) -> String {
        dispatch!(self, n => n.bits())
    }

    pub fn netmask(&self) -> IpAddr {
        dispatch!(self, n => IpAddr::from(n.netmask()))
    }

    pub fn hostmask(&self) -> IpAddr {
        dispatch!(self, n => IpAddr::from(n.hostmask()))
    }

    pub fn network(&self) -> Self {
        match self {
            IpNetwork::V4(n) => IpNetwork::V4(n.network()),
            IpNetwork::V6(n) => IpNetwork::V6(n.network()),
        }
    }

    pub fn broadcast(&self) -> Self {
        match self {
            IpNetwork::V4(n) => IpNetwork::V4(n.broadcast()),
            IpNetwork::V6(n) => IpNetwork::V6(n.broadcast()),
        }
    }

    pub fn is_network(&self) -> bool {
        dispatch!(self, n => n.is_network())
    }

    pub fn size(&self) -> u128 {
        dispatch!(self, n => n.size())
    }

    pub fn first(&self) -> Option<Self> {
        match self {
            IpNetwork::V4(n) => n.first().map(IpNetwork::V4),
            IpNetwork::V6(n) => n.first().map(IpNetwork::V6),
        }
    }

    pub fn last(&self) -> Option<Self> {
        match self {
            IpNetwork::V4(n) => n.last().map(IpNetwork::V4),
            IpNetwork::V6(n) => n.last().map(IpNetwork::V6),
        }
    }

    /// Checks whether `other` is inside `self`.
    ///
    /// A mapped IPv6 network and an IPv4 network are compared through the
    /// IPv4 view of the mapped side; any other mix is a family mismatch.
    pub fn include(&self, other: &IpNetwork) -> Result<bool, NetError> {
        match (self, other) {
            (IpNetwork::V4(a), IpNetwork::V4(b)) => Ok(a.include(b)),
            (IpNetwork::V6(a), IpNetwork::V6(b)) => Ok(a.include(b)),
            (IpNetwork::V6(a), IpNetwork::V4(b)) => a
                .mapped_v4()
                .map(|a| a.include(b))
                .ok_or(NetError::FamilyMismatch),
            (IpNetwork::V4(a), IpNetwork::V6(b)) => b
                .mapped_v4()
                .map(|b| a.include(&b))
                .ok_or(NetError::FamilyMismatch),
        }
    }

    /// Absolute difference of the address values of two same-family networks.
    pub fn distance(&self, other: &IpNetwork) -> Result<u128, NetError> {
        match (self, other) {
            (IpNetwork::V4(a), IpNetwork::V4(b)) => Ok(a.distance(b)),
            (IpNetwork::V6(a), IpNetwork::V6(b)) => Ok(a.distance(b)),
            _ => Err(NetError::FamilyMismatch),
        }
    }

    /// Minimal cover of the span from `self` to `other`, see [`Ipv4Network::range`].
    pub fn range(&self, other: &IpNetwork) -> Result<Vec<IpNetwork>, NetError> {
        match (self, other) {
            (IpNetwork::V4(a), IpNetwork::V4(b)) => {
                Ok(a.range(b).into_iter().map(IpNetwork::V4).collect())
            }
            (IpNetwork::V6(a), IpNetwork::V6(b)) => {
                Ok(a.range(b).into_iter().map(IpNetwork::V6).collect())
            }
            _ => Err(NetError::FamilyMismatch),
        }
    }

    pub fn subnet(&self, new_len: u8) -> Result<Vec<IpNetwork>, NetError> {
        match self {
            IpNetwork::V4(n) => Ok(n.subnet(new_len)?.into_iter().map(IpNetwork::V4).collect()),
            IpNetwork::V6(n) => Ok(n.subnet(new_len)?.into_iter().map(IpNetwork::V6).collect()),
        }
    }

    pub fn supernet(&self, new_len: i32) -> Result<IpNetwork, NetError> {
        match self {
            IpNetwork::V4(n) => n.supernet(new_len).map(IpNetwork::V4),
            IpNetwork::V6(n) => n.supernet(new_len).map(IpNetwork::V6),
        }
    }

    pub fn split(&self, count: u128) -> Result<Vec<IpNetwork>, NetError> {
        match self {
            IpNetwork::V4(n) => Ok(n.split(count)?.into_iter().map(IpNetwork::V4).collect()),
            IpNetwork::V6(n) => Ok(n.split(count)?.into_iter().map(IpNetwork::V6).collect()),
        }
    }

    /// Every address of the span, boxed so both families share one type.
    pub fn iter(&self) -> Box<dyn Iterator<Item = IpNetwork>> {
        match self {
            IpNetwork::V4(n) => Box::new(n.iter().map(IpNetwork::V4)),
            IpNetwork::V6(n) => Box::new(n.iter().map(IpNetwork::V6)),
        }
    }

    /// The span without its first and last address.
    pub fn each_host(&self) -> Box<dyn Iterator<Item = IpNetwork>> {
        match self {
            IpNetwork::V4(n) => Box::new(n.each_host().map(IpNetwork::V4)),
            IpNetwork::V6(n) => Box::new(n.each_host().map(IpNetwork::V6)),
        }
    }
}

impl From<Ipv4Network> for IpNetwork {
    fn from(net: Ipv4Network) -> Self {
        IpNetwork::V4(net)
    }
}

impl From<Ipv6Network> for IpNetwork {
    fn from(net: Ipv6Network) -> Self {
        IpNetwork::V6(net)
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, n => fmt::Display::fmt(n, f))
    }
}

impl FromStr for IpNetwork {
    type Err = NetError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if looks_like_v6(text) {
            text.parse().map(IpNetwork::V6)
        } else {
            text.parse().map(IpNetwork::V4)
        }
    }
}

impl Serialize for IpNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IpNetwork {
    fn deserialize<D>(deserializer: D) -> Result<IpNetwork, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid network '{s}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ip(text: &str) -> IpNetwork {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_family() {
        assert!(ip("10.0.0.0/8").is_ipv4());
        assert!(ip("2001:db8::/32").is_ipv6());
        assert_eq!(ip("::ffff:10.0.0.1/128").family(), "IPv6");
        assert_eq!(ip("10.0.0.1/24").to_string(), "10.0.0.1/24");
        assert!("nonsense".parse::<IpNetwork>().is_err());
    }

    #[test]
    fn test_dispatch() {
        let v4 = ip("10.0.0.1/24");
        assert_eq!(v4.network().to_string(), "10.0.0.0/24");
        assert_eq!(v4.broadcast().to_string(), "10.0.0.255/24");
        assert_eq!(v4.size(), 256);
        assert_eq!(v4.prefix_len(), 24);
        assert_eq!(v4.netmask(), "255.255.255.0".parse::<IpAddr>().unwrap());
        assert_eq!(v4.first().unwrap().to_string(), "10.0.0.1/24");
        assert_eq!(v4.subnet(25).unwrap().len(), 2);
        assert_eq!(v4.supernet(16).unwrap().to_string(), "10.0.0.0/16");

        let v6 = ip("2001:db8::/126");
        assert_eq!(v6.iter().count(), 4);
        assert_eq!(v6.each_host().count(), 2);
        assert_eq!(v6.split(2).unwrap().len(), 2);
    }

    #[test]
    fn test_family_mismatch() {
        let v4 = ip("10.0.0.0/8");
        let v6 = ip("2001:db8::/32");
        assert_eq!(v4.include(&v6).unwrap_err().kind(), ErrorKind::FamilyMismatch);
        assert_eq!(v6.include(&v4).unwrap_err(), NetError::FamilyMismatch);
        assert_eq!(v4.distance(&v6).unwrap_err(), NetError::FamilyMismatch);
        assert_eq!(v4.range(&v6).unwrap_err(), NetError::FamilyMismatch);
        assert_eq!(v4.distance(&ip("10.0.1.0/8")).unwrap(), 256);
    }

    #[test]
    fn test_mapped_include() {
        let mapped = ip("::ffff:10.0.0.0/104");
        assert!(mapped.include(&ip("10.1.2.3/32")).unwrap());
        assert!(!mapped.include(&ip("11.1.2.3/32")).unwrap());
        assert!(ip("10.0.0.0/8").include(&ip("::ffff:10.1.2.3")).unwrap());
    }

    #[test]
    fn test_ordering() {
        let mut nets = vec![ip("2001:db8::/32"), ip("10.0.0.0/8"), ip("::/0")];
        nets.sort();
        assert!(nets[0].is_ipv4());
        assert_eq!(nets[1].to_string(), "::/0");
    }

    #[test]
    fn test_serde() {
        let nets = vec![ip("10.0.0.0/8"), ip("2001:db8::/32")];
        let json = serde_json::to_string(&nets).unwrap();
        assert_eq!(json, r#"["10.0.0.0/8","2001:db8::/32"]"#);
        let back: Vec<IpNetwork> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nets);
    }
}
