//! Addressing engine.
//!
//! This module contains the calculation logic:
//! - [`network`] - network/broadcast/host range of an address and mask
//! - [`partition`] - equal-size subnet partitioning
//! - [`engine`] - `compute` entry points tying them together

mod engine;
mod network;
mod partition;

// Re-export public functions
pub use engine::{compute, compute_with, MaskSource, SPLIT_DEFAULT_PREFIX};
pub use network::{calculate_network, calculate_network_prefix, host_count};
pub use partition::{extra_bits, partition_prefix, partition_subnets, SUBNET_COUNT_CHOICES};
