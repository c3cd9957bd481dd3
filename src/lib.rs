//! IPv4 and IPv6 network arithmetic.
//!
//! Parse, compare and transform networks, then summarize, subtract, split and
//! iterate them:
//!
//! ```
//! use subnet_summary::{summarize, Ipv4Network};
//!
//! let nets: Vec<Ipv4Network> = ["10.0.0.1/24", "10.0.1.1/24"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! assert_eq!(summarize(&nets)[0].to_string(), "10.0.0.0/23");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{ErrorKind, NetError};
pub use models::{IpNetwork, Ipv4Network, Ipv6Network, Network, Prefix};
pub use processing::{
    cover_range, split_network, subtract, subtract_ip, summarize, summarize_ip, AddressRange,
};
