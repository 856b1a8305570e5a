//! Calculator entry points.
//!
//! Every call parses its inputs, derives the mask and builds a fresh
//! [`NetworkInfo`]. Nothing is cached between calls.

use super::network::{calculate_network, calculate_network_prefix};
use super::partition::{partition_prefix, partition_subnets};
use crate::error::{CalcError, Result};
use crate::models::{
    check_prefix, checked_mask_to_prefix, class_default_mask, cut_addr, parse_address,
    parse_address_cidr, NetworkInfo,
};
use std::net::Ipv4Addr;

/// Base prefix used when the mask is derived from the subnet count alone.
pub const SPLIT_DEFAULT_PREFIX: u8 = 24;

/// Where the subnet mask comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskSource {
    /// Explicit CIDR prefix length.
    Prefix(u8),
    /// Explicit dotted-quad mask.
    Mask(String),
    /// Legacy class default of the first octet.
    Classful,
    /// A /24 split in `subnet_count`; results describe one partition.
    SplitDefault,
}

/// Compute the network facts and `subnet_count` partitions of `address/prefix_length`.
///
/// `address` may carry a `/n` suffix only when `n` equals `prefix_length`.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::compute;
/// let info = compute("192.168.0.103", 24, 1).unwrap();
/// assert_eq!(info.network_address.to_string(), "192.168.0.0");
/// assert_eq!(info.host_count, 254);
/// ```
pub fn compute(address: &str, prefix_length: u32, subnet_count: u32) -> Result<NetworkInfo> {
    let prefix = check_prefix(prefix_length)?;
    if let (_, Some(suffix)) = parse_address_cidr(address)? {
        if suffix != prefix {
            return Err(CalcError::InvalidAddressFormat(address.to_string()));
        }
    }
    compute_with(address, &MaskSource::Prefix(prefix), subnet_count)
}

/// Compute with the mask taken from `source`.
///
/// An address written as `a.b.c.d/n` uses `n` whatever `source` says.
pub fn compute_with(address: &str, source: &MaskSource, subnet_count: u32) -> Result<NetworkInfo> {
    let (addr, cidr_prefix) = parse_address_cidr(address)?;
    let source = match cidr_prefix {
        Some(prefix) => MaskSource::Prefix(prefix),
        None => source.clone(),
    };
    log::debug!("compute_with({addr}, {source:?}, {subnet_count})");

    let info = match source {
        MaskSource::Prefix(prefix) => {
            with_subnets(calculate_network_prefix(addr, prefix)?, subnet_count)?
        }
        MaskSource::Mask(mask) => {
            let mask = parse_address(&mask).map_err(|_| CalcError::InvalidMask(mask.clone()))?;
            checked_mask_to_prefix(mask)?;
            with_subnets(calculate_network(addr, mask), subnet_count)?
        }
        MaskSource::Classful => {
            let mask = class_default_mask(addr.octets()[0]);
            with_subnets(calculate_network(addr, mask), subnet_count)?
        }
        MaskSource::SplitDefault => split_default(addr, subnet_count)?,
    };

    log::debug!(
        "{}/{} -> network {} broadcast {} hosts {} subnets {}",
        info.address,
        info.prefix_length,
        info.network_address,
        info.broadcast_address,
        info.host_count,
        info.subnets.len()
    );
    Ok(info)
}

fn with_subnets(mut info: NetworkInfo, subnet_count: u32) -> Result<NetworkInfo> {
    info.subnets = partition_subnets(info.network_address, info.prefix_length, subnet_count)?;
    Ok(info)
}

fn split_default(addr: Ipv4Addr, subnet_count: u32) -> Result<NetworkInfo> {
    let prefix = partition_prefix(SPLIT_DEFAULT_PREFIX, subnet_count)?;
    let mut info = calculate_network_prefix(addr, prefix)?;
    let base = cut_addr(addr, SPLIT_DEFAULT_PREFIX)?;
    info.subnets = partition_subnets(base, SPLIT_DEFAULT_PREFIX, subnet_count)?;
    Ok(info)
}
