//! IPv4 address codec and CIDR notation utilities.
//!
//! Converts between dotted-quad text, the 32-bit integer form and the
//! binary rendering, and provides the [`Ipv4`] `addr/mask` value type.

use crate::error::{CalcError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use super::mask::{get_cidr_mask, MAX_LENGTH};

lazy_static! {
    static ref RE_ADDR: Regex =
        Regex::new(r"^\s*([^./\s]+)\.([^./\s]+)\.([^./\s]+)\.([^./\s]+)(?:/([^/\s]*))?\s*$")
            .expect("Invalid Regex?");
}

/// Parse a dotted-quad address, optionally followed by `/prefix`.
///
/// Returns the address and the prefix if one was present.
pub fn parse_address_cidr(input: &str) -> Result<(Ipv4Addr, Option<u8>)> {
    let caps = RE_ADDR
        .captures(input)
        .ok_or_else(|| CalcError::InvalidAddressFormat(input.to_string()))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let segment = &caps[i + 1];
        if !segment.chars().all(|c| c.is_ascii_digit()) {
            return Err(CalcError::InvalidAddressFormat(input.to_string()));
        }
        // All digits: a failed parse can only mean the number is too big.
        *octet = segment.parse().map_err(|_| CalcError::OctetOutOfRange {
            octet: i,
            value: segment.to_string(),
        })?;
    }

    let prefix = match caps.get(5) {
        Some(m) => Some(parse_prefix(m.as_str())?),
        None => None,
    };
    Ok((Ipv4Addr::from(octets), prefix))
}

/// Parse a plain dotted-quad address.
pub fn parse_address(input: &str) -> Result<Ipv4Addr> {
    match parse_address_cidr(input)? {
        (addr, None) => Ok(addr),
        (_, Some(_)) => Err(CalcError::InvalidAddressFormat(input.to_string())),
    }
}

/// Parse a prefix length such as `24` or `/24`.
pub fn parse_prefix(input: &str) -> Result<u8> {
    let digits = input.trim().trim_start_matches('/');
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CalcError::InvalidAddressFormat(input.to_string()));
    }
    match digits.parse::<u32>() {
        Ok(len) => check_prefix(len),
        // too many digits for a u32, report the text as given
        Err(_) => Err(CalcError::InvalidAddressFormat(input.to_string())),
    }
}

/// Check a prefix length is within 0..=32.
pub fn check_prefix(len: u32) -> Result<u8> {
    if len > MAX_LENGTH as u32 {
        Err(CalcError::PrefixOutOfRange(len))
    } else {
        Ok(len as u8)
    }
}

/// Dotted-quad text to its 32-bit integer value.
pub fn to_integer(address: &str) -> Result<u32> {
    parse_address(address).map(u32::from)
}

/// 32-bit integer value to dotted-quad text.
pub fn to_dotted_quad(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// The four octets of an address, most significant first.
pub fn to_octets(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Render each octet as 8 zero-padded bits, joined with `.`.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::to_binary_string;
/// assert_eq!(
///     to_binary_string([192, 168, 0, 103]),
///     "11000000.10101000.00000000.01100111"
/// );
/// ```
pub fn to_binary_string(octets: [u8; 4]) -> String {
    octets.iter().map(|o| format!("{o:08b}")).join(".")
}

/// Next address, wrapping from 255.255.255.255 to 0.0.0.0.
pub fn increment(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_add(1))
}

/// Previous address, wrapping from 0.0.0.0 to 255.255.255.255.
pub fn decrement(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_sub(1))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from((u32::from(addr) & mask) | !mask))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        match parse_address_cidr(addr_cidr)? {
            (addr, Some(mask)) => Ok(Ipv4 { addr, mask }),
            (_, None) => Err(CalcError::InvalidAddressFormat(addr_cidr.to_string())),
        }
    }

    /// Mask bits of this subnet. A `mask` above 32 counts as /32.
    fn mask_bits(&self) -> u32 {
        match self.mask.min(MAX_LENGTH) {
            0 => 0,
            len => u32::MAX << (MAX_LENGTH - len),
        }
    }

    /// The network (lowest) address of this subnet.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// The broadcast (highest) address of this subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Number of addresses covered, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network() && ip <= self.broadcast()
    }
}

impl FromStr for Ipv4 {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
