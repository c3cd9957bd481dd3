//! Removal of address blocks from a set of networks.

use super::summarize::{partition, summarize};
use crate::models::{AddressFamily, IpNetwork, Network};

/// Removes every address covered by `subtrahends` from `targets`.
///
/// Each pass drops the pending networks fully included by a subtrahend and
/// splits the ones partially overlapping a subtrahend into their two halves,
/// which are examined again on the next pass. Untouched networks are kept.
/// The survivors are summarized.
pub fn subtract<A: AddressFamily>(
    targets: &[Network<A>],
    subtrahends: &[Network<A>],
) -> Vec<Network<A>> {
    let mut kept = Vec::new();
    let mut pending: Vec<Network<A>> = targets.iter().map(|n| n.network()).collect();
    let mut passes = 0;

    while !pending.is_empty() {
        passes += 1;
        let mut carried = Vec::new();
        for item in pending {
            if subtrahends.iter().any(|s| s.include(&item)) {
                log::trace!("drop {item}");
                continue;
            }
            if !item.overlap(subtrahends) {
                kept.push(item);
                continue;
            }
            match item.halves() {
                Some(halves) => carried.extend(halves),
                // an overlapping single address is included by its subtrahend
                None => log::warn!("unsplittable overlap {item} dropped"),
            }
        }
        pending = carried;
    }

    log::debug!(
        "subtract {}: {} target(s) - {} subtrahend(s) -> {} block(s) in {passes} pass(es)",
        A::NAME,
        targets.len(),
        subtrahends.len(),
        kept.len()
    );
    summarize(&kept)
}

/// Subtracts a mixed list; only same-family subtrahends act on a target.
pub fn subtract_ip(targets: &[IpNetwork], subtrahends: &[IpNetwork]) -> Vec<IpNetwork> {
    let (t4, t6) = partition(targets);
    let (s4, s6) = partition(subtrahends);
    subtract(&t4, &s4)
        .into_iter()
        .map(IpNetwork::V4)
        .chain(subtract(&t6, &s6).into_iter().map(IpNetwork::V6))
        .collect()
}
