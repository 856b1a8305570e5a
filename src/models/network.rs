//! Calculation result records.

use super::{IpClass, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

/// One partition of a split network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
}

/// Everything derived from an (address, mask, subnet count) input.
///
/// Rebuilt from scratch on every call to the engine, never updated in place.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The address as given.
    pub address: Ipv4Addr,
    /// Prefix length the mask was built from.
    pub prefix_length: u8,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub ip_class: IpClass,
    pub subnet_mask: Ipv4Addr,
    /// `2^(32 - prefix) - 2`. Negative for /32 and zero for /31.
    pub host_count: i64,
    /// Input address as four dot-joined 8-bit groups.
    pub binary_representation: String,
    /// Partitions ordered by address, index 0 first.
    pub subnets: Vec<SubnetInfo>,
}

impl NetworkInfo {
    /// The network in `addr/prefix` form.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network_address,
            mask: self.prefix_length,
        }
    }
}
