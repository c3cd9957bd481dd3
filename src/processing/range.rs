//! Address iteration and minimal covering of arbitrary address spans.

use crate::models::address::{broadcast_addr, lo_mask, AddressFamily};
use crate::models::{Network, Prefix};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Lazy ascending iterator over the addresses of `[first, last]`.
///
/// Every item carries the same prefix. The iterator is `Clone`, so a span can
/// be walked again without recomputing its bounds. Spans of coarse IPv6
/// networks are astronomically large: bound them before collecting.
#[derive(Clone, Debug)]
pub struct AddressRange<A> {
    next: u128,
    last: u128,
    prefix: Prefix,
    done: bool,
    _family: PhantomData<A>,
}

impl<A: AddressFamily> AddressRange<A> {
    pub(crate) fn new(first: u128, last: u128, prefix: Prefix) -> AddressRange<A> {
        AddressRange {
            next: first,
            last,
            prefix,
            done: first > last,
            _family: PhantomData,
        }
    }

    pub(crate) fn empty(prefix: Prefix) -> AddressRange<A> {
        AddressRange {
            next: 1,
            last: 0,
            prefix,
            done: true,
            _family: PhantomData,
        }
    }

    /// Addresses left to yield, saturating at `u128::MAX`.
    pub fn remaining(&self) -> u128 {
        if self.done {
            0
        } else {
            (self.last - self.next).saturating_add(1)
        }
    }

    fn item(&self, bits: u128) -> Network<A> {
        Network::from_bits(bits, self.prefix.value())
    }
}

impl<A: AddressFamily> Iterator for AddressRange<A> {
    type Item = Network<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bits = self.next;
        if bits == self.last {
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(self.item(bits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) if self.remaining() != u128::MAX => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl<A: AddressFamily> DoubleEndedIterator for AddressRange<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bits = self.last;
        if bits == self.next {
            self.done = true;
        } else {
            self.last -= 1;
        }
        Some(self.item(bits))
    }
}

impl<A: AddressFamily> FusedIterator for AddressRange<A> {}

/// Covers `[start, end]` with the fewest aligned networks, lowest first.
pub fn cover_range<A: AddressFamily>(start: u128, end: u128) -> Vec<Network<A>> {
    let max = A::MAX_PREFIX;
    let mut blocks = Vec::new();
    if start > end {
        return blocks;
    }

    let mut next_ip = start;
    loop {
        let mask = find_biggest_subnet(next_ip, end, max);
        blocks.push(Network::from_bits(next_ip, mask));

        let hi = broadcast_addr(next_ip, mask, max);
        if hi >= end {
            break;
        }
        next_ip = hi + 1;
    }
    log::trace!("cover_range: {} block(s) for span of {}", blocks.len(), A::NAME);
    blocks
}

/// Shortest prefix starting at `start_ip` whose block does not pass `end`.
///
/// The starting candidate is the alignment of `start_ip` (its trailing zeros);
/// the prefix then grows until the block fits.
fn find_biggest_subnet(start_ip: u128, end: u128, max: u8) -> u8 {
    let mut next_mask = lo_mask(start_ip, max);
    while broadcast_addr(start_ip, next_mask, max) > end {
        next_mask += 1;
    }
    next_mask
}
