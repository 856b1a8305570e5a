//! Domain models for the IPv4 calculator.
//!
//! This module contains the core data structures and conversions:
//! - [`Ipv4`] and the dotted-quad / integer / binary codec
//! - subnet mask conversions
//! - [`IpClass`] - legacy class of an address
//! - [`NetworkInfo`] and [`SubnetInfo`] - calculation results

mod class;
mod ipv4;
mod mask;
mod network;

// Re-export public types
pub use class::IpClass;
pub use ipv4::{
    broadcast_addr, check_prefix, cut_addr, decrement, increment, parse_address,
    parse_address_cidr, parse_prefix, to_binary_string, to_dotted_quad, to_integer, to_octets,
    Ipv4,
};
pub use mask::{
    checked_mask_to_prefix, class_default_mask, get_cidr_mask, is_contiguous_mask,
    mask_to_prefix, prefix_to_mask, wildcard_mask, MAX_LENGTH,
};
pub use network::{NetworkInfo, SubnetInfo};
