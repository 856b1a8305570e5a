//! Terminal output.
//!
//! Renders a [`NetworkInfo`] as aligned `label: value` lines. Fields with no
//! result print as `-`.

use crate::models::NetworkInfo;
use colored::Colorize;
use std::fmt::Write;

/// Shown in place of every value until a valid result exists.
pub const PLACEHOLDER: &str = "-";

const LABEL_WIDTH: usize = 20;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

fn line(out: &mut String, label: &str, value: &str) {
    let label = format!("{label}:");
    let _ = writeln!(
        out,
        "{} {}",
        format!("{label:<LABEL_WIDTH$}").bold(),
        format_field(value, 35)
    );
}

fn value_or_placeholder<F>(info: Option<&NetworkInfo>, f: F) -> String
where
    F: Fn(&NetworkInfo) -> String,
{
    info.map(f).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Text report of `info`, or a report of placeholders when `None`.
pub fn render_text(info: Option<&NetworkInfo>) -> String {
    let mut out = String::new();
    let v = |f: fn(&NetworkInfo) -> String| value_or_placeholder(info, f);

    line(&mut out, "IP class", &v(|i| i.ip_class.to_string()));
    line(&mut out, "Subnet mask", &v(|i| i.subnet_mask.to_string()));
    line(&mut out, "Prefix length", &v(|i| format!("/{}", i.prefix_length)));
    line(&mut out, "Network address", &v(|i| i.network_address.to_string()));
    line(&mut out, "CIDR", &v(|i| i.cidr().to_string()));
    line(&mut out, "Broadcast address", &v(|i| i.broadcast_address.to_string()));
    line(&mut out, "First host", &v(|i| i.first_host.to_string()));
    line(&mut out, "Last host", &v(|i| i.last_host.to_string()));
    line(&mut out, "Host count", &v(|i| i.host_count.to_string()));
    line(&mut out, "Binary", &v(|i| i.binary_representation.clone()));

    let Some(info) = info else {
        return out;
    };

    let _ = writeln!(out, "\n{}", format!("Subnets ({}):", info.subnets.len()).cyan());
    for (index, subnet) in info.subnets.iter().enumerate() {
        let _ = writeln!(out, "{}", format!("#{}", index + 1).blue());
        line(&mut out, "  Network address", &subnet.network_address.to_string());
        line(&mut out, "  First host", &subnet.first_host.to_string());
        line(&mut out, "  Last host", &subnet.last_host.to_string());
        line(&mut out, "  Broadcast", &subnet.broadcast_address.to_string());
    }
    out
}
