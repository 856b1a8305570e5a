//! Subnet mask conversions.

use crate::error::{CalcError, Result};
use std::net::Ipv4Addr;

use super::IpClass;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(CalcError::PrefixOutOfRange(len as u32))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Dotted-quad subnet mask for a prefix length.
///
/// Built octet by octet: each octet takes up to 8 of the remaining prefix
/// bits as leading ones.
pub fn prefix_to_mask(len: u8) -> Result<Ipv4Addr> {
    if len > MAX_LENGTH {
        return Err(CalcError::PrefixOutOfRange(len as u32));
    }
    let mut remaining = len as u32;
    let mut octets = [0u8; 4];
    for octet in octets.iter_mut() {
        let bits = remaining.min(8);
        *octet = ((256 - (1u32 << (8 - bits))) % 256) as u8;
        remaining -= bits;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Number of one-bits in a mask.
///
/// Only meaningful for contiguous masks, see [`is_contiguous_mask`].
pub fn mask_to_prefix(mask: Ipv4Addr) -> u8 {
    u32::from(mask).count_ones() as u8
}

/// True when all one-bits are at the left of the mask.
pub fn is_contiguous_mask(mask: Ipv4Addr) -> bool {
    let bits = u32::from(mask);
    bits.leading_ones() == bits.count_ones()
}

/// Prefix length of a mask, rejecting masks with holes in them.
pub fn checked_mask_to_prefix(mask: Ipv4Addr) -> Result<u8> {
    if is_contiguous_mask(mask) {
        Ok(mask_to_prefix(mask))
    } else {
        Err(CalcError::InvalidMask(mask.to_string()))
    }
}

/// Host bits of a mask, e.g. `0.0.0.255` for a /24.
pub fn wildcard_mask(mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(!u32::from(mask))
}

/// Legacy classful mask for an address' first octet.
///
/// Classes D, E and unclassified addresses fall back to a /24.
pub fn class_default_mask(first_octet: u8) -> Ipv4Addr {
    match IpClass::classify(first_octet) {
        IpClass::A => Ipv4Addr::new(255, 0, 0, 0),
        IpClass::B => Ipv4Addr::new(255, 255, 0, 0),
        _ => Ipv4Addr::new(255, 255, 255, 0),
    }
}
