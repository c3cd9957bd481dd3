//! Output formatting for network lists.
//!
//! This module renders networks for the command line:
//! - [`csv`] - quoted CSV rows
//! - [`terminal`] - aligned table with colors
//!
//! JSON goes straight through `serde_json` on [`NetworkRow`].

mod csv;
mod terminal;

use crate::config::OutputFormat;
use crate::models::IpNetwork;
use serde::Serialize;
use std::error::Error;

pub use csv::to_csv;
pub use terminal::to_table;

/// One printable line describing a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRow {
    pub cidr: String,
    pub family: String,
    pub network: String,
    pub broadcast: String,
    pub netmask: String,
    pub first: String,
    pub last: String,
    pub size: String,
}

impl From<&IpNetwork> for NetworkRow {
    fn from(net: &IpNetwork) -> Self {
        let addr_of = |n: Option<IpNetwork>| {
            n.map(|n| n.addr().to_string()).unwrap_or_default()
        };
        NetworkRow {
            cidr: net.to_string(),
            family: net.family().to_string(),
            network: net.network().addr().to_string(),
            broadcast: net.broadcast().addr().to_string(),
            netmask: net.netmask().to_string(),
            first: addr_of(net.first()),
            last: addr_of(net.last()),
            size: size_label(net),
        }
    }
}

/// Block size as text; `::/0` holds 2^128 addresses which `u128` cannot carry.
fn size_label(net: &IpNetwork) -> String {
    if net.prefix().host_len() >= 128 {
        "2^128".to_string()
    } else {
        net.size().to_string()
    }
}

/// Rows for a list of networks, in input order.
pub fn rows(networks: &[IpNetwork]) -> Vec<NetworkRow> {
    networks.iter().map(NetworkRow::from).collect()
}

/// Renders `networks` in the requested format.
pub fn render(networks: &[IpNetwork], format: OutputFormat) -> Result<String, Box<dyn Error>> {
    log::debug!("render {} network(s) as {format}", networks.len());
    let rows = rows(networks);
    Ok(match format {
        OutputFormat::Table => to_table(&rows),
        OutputFormat::Csv => to_csv(&rows),
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
    })
}
