//! Network set algorithms.
//!
//! This module contains the algorithms working on lists of networks:
//! - [`summarize`] - aggregation into the fewest covering blocks
//! - [`subtract`] - removal of blocks from a set
//! - [`split`] - cutting one network into an exact number of blocks
//! - [`range`] - address iteration and minimal covering of a span

pub mod range;
pub mod split;
pub mod subtract;
pub mod summarize;

// Re-export public functions
pub use range::{cover_range, AddressRange};
pub use split::split_network;
pub use subtract::{subtract, subtract_ip};
pub use summarize::{summarize, summarize_ip};
