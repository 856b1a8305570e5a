//! Equal-size partitioning of a network.

use crate::error::{CalcError, Result};
use crate::models::{check_prefix, cut_addr, decrement, increment, SubnetInfo, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Subnet counts offered by the calculator: 1, 2, 4 ... 256.
pub const SUBNET_COUNT_CHOICES: [u32; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

/// Prefix bits needed to hold `subnet_count` subnets, `log2(n)`.
///
/// Only the counts in [`SUBNET_COUNT_CHOICES`] are accepted.
pub fn extra_bits(subnet_count: u32) -> Result<u8> {
    if !SUBNET_COUNT_CHOICES.contains(&subnet_count) {
        return Err(CalcError::InvalidSubnetCount(subnet_count));
    }
    Ok(subnet_count.trailing_zeros() as u8)
}

/// Prefix length of each partition when `prefix_length` is split in `subnet_count`.
pub fn partition_prefix(prefix_length: u8, subnet_count: u32) -> Result<u8> {
    let prefix = check_prefix(prefix_length as u32)?;
    let extra = extra_bits(subnet_count)?;
    if prefix + extra > MAX_LENGTH {
        return Err(CalcError::SubnetOverflow {
            prefix,
            extra_bits: extra,
        });
    }
    Ok(prefix + extra)
}

/// Split `network_address/prefix_length` into `subnet_count` contiguous subnets.
///
/// Each subnet has `2^(32 - (prefix + extra_bits))` addresses and together
/// they cover the whole network.
pub fn partition_subnets(
    network_address: Ipv4Addr,
    prefix_length: u8,
    subnet_count: u32,
) -> Result<Vec<SubnetInfo>> {
    let sub_prefix = partition_prefix(prefix_length, subnet_count)?;
    let size = 1u64 << (MAX_LENGTH - sub_prefix);
    let base = u32::from(cut_addr(network_address, prefix_length)?) as u64;
    log::debug!(
        "partition_subnets({network_address}/{prefix_length}, {subnet_count}) -> /{sub_prefix} of {size} addresses"
    );

    let mut subnets = Vec::with_capacity(subnet_count as usize);
    for i in 0..subnet_count as u64 {
        let lo = base + i * size;
        let hi = lo + size - 1;
        // base is aligned to prefix_length, so every partition stays below 2^32
        let network = Ipv4Addr::from(lo as u32);
        let broadcast = Ipv4Addr::from(hi as u32);
        log::trace!("subnet {i}: {network} - {broadcast}");
        subnets.push(SubnetInfo {
            network_address: network,
            broadcast_address: broadcast,
            first_host: increment(network),
            last_host: decrement(broadcast),
        });
    }
    Ok(subnets)
}
