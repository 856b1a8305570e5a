//! CSV output of the subnet list.

use crate::models::NetworkInfo;
use itertools::Itertools;

const HEADER: [&str; 5] = ["subnet", "network", "first_host", "last_host", "broadcast"];

/// Header line followed by one row per subnet, numbered from 1.
///
/// Without a result only the header is written.
pub fn render_csv(info: Option<&NetworkInfo>) -> String {
    let mut out = HEADER.iter().join(",");
    out.push('\n');
    let Some(info) = info else {
        return out;
    };
    for (index, subnet) in info.subnets.iter().enumerate() {
        let row = [
            (index + 1).to_string(),
            subnet.network_address.to_string(),
            subnet.first_host.to_string(),
            subnet.last_host.to_string(),
            subnet.broadcast_address.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
