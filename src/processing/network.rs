//! Network facts for an address and a mask.

use crate::error::Result;
use crate::models::{
    decrement, increment, mask_to_prefix, prefix_to_mask, to_binary_string, IpClass, NetworkInfo,
    MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Network, broadcast and host range of `address` under `mask`.
///
/// The subnet list of the returned record is empty; see
/// [`super::partition_subnets`] to fill it.
pub fn calculate_network(address: Ipv4Addr, mask: Ipv4Addr) -> NetworkInfo {
    let addr = address.octets();
    let mask_octets = mask.octets();

    let mut network = [0u8; 4];
    let mut broadcast = [0u8; 4];
    for i in 0..4 {
        network[i] = addr[i] & mask_octets[i];
        broadcast[i] = network[i] | !mask_octets[i];
    }
    let network_address = Ipv4Addr::from(network);
    let broadcast_address = Ipv4Addr::from(broadcast);
    let prefix_length = mask_to_prefix(mask);

    NetworkInfo {
        address,
        prefix_length,
        network_address,
        broadcast_address,
        first_host: increment(network_address),
        last_host: decrement(broadcast_address),
        ip_class: IpClass::classify(addr[0]),
        subnet_mask: mask,
        host_count: host_count(prefix_length),
        binary_representation: to_binary_string(addr),
        subnets: Vec::new(),
    }
}

/// Same as [`calculate_network`] with the mask given as a prefix length.
pub fn calculate_network_prefix(address: Ipv4Addr, prefix_length: u8) -> Result<NetworkInfo> {
    let mask = prefix_to_mask(prefix_length)?;
    Ok(calculate_network(address, mask))
}

/// Usable hosts: every address except network and broadcast.
///
/// Not floored, so /31 gives 0 and /32 gives -1.
pub fn host_count(prefix_length: u8) -> i64 {
    let host_bits = MAX_LENGTH - prefix_length.min(MAX_LENGTH);
    (1i64 << host_bits) - 2
}
