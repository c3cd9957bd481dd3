//! Splitting a network into an exact number of blocks.

use crate::error::NetError;
use crate::models::{AddressFamily, Network};

/// Splits `net` into exactly `count` blocks covering it, lowest first.
///
/// The network is first cut into the smallest power of two of equal blocks
/// not below `count`. Adjacent pairs are then merged, scanning from the
/// highest block down, until `count` remain, so uneven splits put the larger
/// blocks at the end.
pub fn split_network<A: AddressFamily>(
    net: &Network<A>,
    count: u128,
) -> Result<Vec<Network<A>>, NetError> {
    let size = net.size();
    if count == 0 || count > size {
        return Err(NetError::SplitCountOutOfRange { count, max: size });
    }

    let extra_bits = count
        .checked_next_power_of_two()
        .map_or(128, |p| p.trailing_zeros());
    let new_len = net.prefix().sum(extra_bits as u8)?;
    let mut blocks = net.subnet(new_len.value())?;

    while blocks.len() as u128 > count {
        if !merge_last_pair(&mut blocks) {
            log::warn!(
                "split {net}: no adjacent pair left to merge at {} block(s)",
                blocks.len()
            );
            break;
        }
    }
    log::debug!("split {net} into {} block(s)", blocks.len());
    Ok(blocks)
}

/// Merges the highest adjacent pair that forms a supernet; false if none does.
fn merge_last_pair<A: AddressFamily>(blocks: &mut Vec<Network<A>>) -> bool {
    for i in (0..blocks.len().saturating_sub(1)).rev() {
        if let Some(merged) = blocks[i].proper_supernet(&[blocks[i + 1]]) {
            blocks[i] = merged;
            blocks.remove(i + 1);
            return true;
        }
    }
    false
}
