//! IPv4 addressing and subnetting calculator.
//!
//! Given a dotted-quad address and a prefix length (or a mask, or the legacy
//! class default) the engine derives the network, broadcast and host range,
//! the address class and binary form, and splits the network into equal
//! subnets.
//!
//! ```
//! let info = ipv4_subnet_calc::compute("192.168.1.10", 24, 4).unwrap();
//! assert_eq!(info.subnets[3].network_address.to_string(), "192.168.1.192");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, Result};
pub use models::{IpClass, NetworkInfo, SubnetInfo};
pub use processing::{compute, compute_with, MaskSource};
