//! Text splitting for `addr[/prefix]` input.

use crate::error::NetError;
use regex::Regex;
use std::sync::OnceLock;

/// Address part, then an optional prefix length or netmask after the slash.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^\s*([0-9A-Fa-f:.]+)(?:/([0-9A-Fa-f:.]+))?\s*$").expect("Invalid Regex")
    })
}

/// Splits `text` into its address and optional suffix.
///
/// Only the shape is checked here; the caller parses each part.
pub fn split_cidr(text: &str) -> Result<(&str, Option<&str>), NetError> {
    let caps = get_cidr_regex()
        .captures(text)
        .ok_or_else(|| NetError::InvalidAddress(text.trim().to_string()))?;
    // group 1 always participates when the pattern matches
    let addr = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let suffix = caps.get(2).map(|m| m.as_str());
    log::trace!("split_cidr({text}) -> {addr} {suffix:?}");
    Ok((addr, suffix))
}

/// True when `text` has the shape of an IPv6 address (contains a colon).
pub fn looks_like_v6(text: &str) -> bool {
    split_cidr(text)
        .map(|(addr, _)| addr.contains(':'))
        .unwrap_or(false)
}
