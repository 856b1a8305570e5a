//! Error types for the addressing engine.
//!
//! Every engine operation fails fast with a [`CalcError`] instead of
//! producing a nonsensical address.

use thiserror::Error;

/// Input validation failures raised by the addressing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Not four dot-separated decimal segments.
    #[error("invalid IPv4 address format: {0:?}")]
    InvalidAddressFormat(String),

    /// A segment parsed as a number but does not fit in an octet.
    #[error("octet {octet} out of range (0-255): {value}")]
    OctetOutOfRange { octet: usize, value: String },

    /// Prefix length above 32.
    #[error("prefix length /{0} out of range (0-32)")]
    PrefixOutOfRange(u32),

    /// Dotted-quad mask whose one-bits are not contiguous from the left.
    #[error("not a contiguous subnet mask: {0}")]
    InvalidMask(String),

    /// Zero subnets requested.
    #[error("subnet count must be at least 1, got {0}")]
    InvalidSubnetCount(u32),

    /// The partition would need more host bits than the network has.
    #[error("cannot split /{prefix} into 2^{extra_bits} subnets: prefix would exceed /32")]
    SubnetOverflow { prefix: u8, extra_bits: u8 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalcError>;
