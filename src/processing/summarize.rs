//! Aggregation of networks into the fewest covering blocks.
//!
//! Networks are reduced to their network address and sorted, then adjacent
//! pairs are merged into their common supernet until a full pass merges
//! nothing. A pair merges when one side already covers the other or when
//! the two halves of a supernet sit next to each other.

use crate::models::{AddressFamily, IpNetwork, Ipv4Network, Ipv6Network, Network};
use itertools::Itertools;

/// Summarizes same-family networks.
///
/// Gaps are preserved; the result is sorted and contains no network included
/// by another. Input order does not matter.
pub fn summarize<A: AddressFamily>(networks: &[Network<A>]) -> Vec<Network<A>> {
    let mut nets: Vec<Network<A>> = networks.iter().map(|n| n.network()).sorted().collect();
    if nets.len() < 2 {
        return nets;
    }

    let mut passes = 0;
    loop {
        passes += 1;
        let mut merged = false;
        let mut i = 0;
        while i + 1 < nets.len() {
            match nets[i].proper_supernet(&[nets[i + 1]]) {
                Some(supernet) => {
                    log::trace!("merge {} + {} -> {supernet}", nets[i], nets[i + 1]);
                    nets[i] = supernet;
                    nets.remove(i + 1);
                    merged = true;
                    // the merged block may now swallow its left neighbour
                    i = i.saturating_sub(1);
                }
                None => i += 1,
            }
        }
        if !merged {
            break;
        }
    }
    log::debug!(
        "summarize {}: {} network(s) -> {} in {passes} pass(es)",
        A::NAME,
        networks.len(),
        nets.len()
    );
    nets
}

/// Summarizes a mixed list, IPv4 results first.
pub fn summarize_ip(networks: &[IpNetwork]) -> Vec<IpNetwork> {
    let (v4, v6) = partition(networks);
    summarize(&v4)
        .into_iter()
        .map(IpNetwork::V4)
        .chain(summarize(&v6).into_iter().map(IpNetwork::V6))
        .collect()
}

/// Splits a mixed list by family.
pub(crate) fn partition(networks: &[IpNetwork]) -> (Vec<Ipv4Network>, Vec<Ipv6Network>) {
    let mut v4 = Vec::new();
    let mut v6 = Vec::new();
    for net in networks {
        match net {
            IpNetwork::V4(n) => v4.push(*n),
            IpNetwork::V6(n) => v6.push(*n),
        }
    }
    (v4, v6)
}
