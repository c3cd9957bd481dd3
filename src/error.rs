//! Error type shared by every network operation.

/// Broad category of a [`NetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A prefix length or a count is outside its valid bounds.
    Range,
    /// Input bits, bytes or text are malformed.
    Format,
    /// IPv4 and IPv6 values were combined.
    FamilyMismatch,
}

/// Errors raised while building or transforming networks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetError {
    /// Prefix length above the family maximum.
    #[error("prefix length {len} is out of range 0..={max}")]
    PrefixOutOfRange { len: u32, max: u8 },
    /// Target prefix of a subnet/supernet/sub_prefix call is outside the allowed window.
    #[error("new prefix {target} is out of range {min}..={max}")]
    NewPrefixOutOfRange { target: i32, min: i32, max: i32 },
    /// Split count must be within `1..=size`.
    #[error("cannot split into {count} subnets, allowed range is 1..={max}")]
    SplitCountOutOfRange { count: u128, max: u128 },
    /// Netmask is not a run of ones followed by zeros.
    #[error("invalid netmask '{0}'")]
    InvalidNetmask(String),
    /// Byte buffer length does not match the address width.
    #[error("expected {expected} bytes but got {actual}")]
    InvalidByteLength { expected: usize, actual: usize },
    /// Integer does not fit the address width.
    #[error("integer {value} does not fit a {bits}-bit address")]
    IntegerOutOfRange { value: u128, bits: u8 },
    /// Text is not a valid address or network.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
    /// IPv4 and IPv6 values were combined.
    #[error("cannot combine IPv4 and IPv6 networks")]
    FamilyMismatch,
}

impl NetError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PrefixOutOfRange { .. }
            | Self::NewPrefixOutOfRange { .. }
            | Self::SplitCountOutOfRange { .. } => ErrorKind::Range,
            Self::InvalidNetmask(_)
            | Self::InvalidByteLength { .. }
            | Self::IntegerOutOfRange { .. }
            | Self::InvalidAddress(_) => ErrorKind::Format,
            Self::FamilyMismatch => ErrorKind::FamilyMismatch,
        }
    }
}
