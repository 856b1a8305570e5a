//! Integration tests for ipv4-subnet-calc
//!
//! These tests drive the public API the way the command line front end does.

use ipv4_subnet_calc::{
    compute, compute_with,
    models::{mask_to_prefix, prefix_to_mask, to_binary_string, to_dotted_quad, to_integer},
    output::{render, OutputFormat},
    processing::{partition_subnets, SUBNET_COUNT_CHOICES},
    CalcError, IpClass, MaskSource,
};
use std::net::Ipv4Addr;

#[test]
fn test_class_c_example() {
    let info = compute("192.168.0.103", 24, 1).expect("valid input");

    assert_eq!(info.subnet_mask.to_string(), "255.255.255.0");
    assert_eq!(info.network_address.to_string(), "192.168.0.0");
    assert_eq!(info.broadcast_address.to_string(), "192.168.0.255");
    assert_eq!(info.first_host.to_string(), "192.168.0.1");
    assert_eq!(info.last_host.to_string(), "192.168.0.254");
    assert_eq!(info.host_count, 254);
    assert_eq!(info.ip_class.label(), "Classe C");
    assert_eq!(
        info.binary_representation,
        "11000000.10101000.00000000.01100111"
    );
}

#[test]
fn test_four_subnets_example() {
    let info = compute("192.168.1.10", 24, 4).expect("valid input");

    assert_eq!(info.subnets.len(), 4);
    for (i, subnet) in info.subnets.iter().enumerate() {
        let size = u32::from(subnet.broadcast_address) - u32::from(subnet.network_address) + 1;
        assert_eq!(size, 64, "subnet {i}");
    }
    assert_eq!(info.subnets[0].network_address.to_string(), "192.168.1.0");
    assert_eq!(info.subnets[0].broadcast_address.to_string(), "192.168.1.63");
    assert_eq!(info.subnets[3].network_address.to_string(), "192.168.1.192");
    assert_eq!(info.subnets[3].broadcast_address.to_string(), "192.168.1.255");
}

#[test]
fn test_partition_coverage() {
    let bases = [
        ("10.0.0.0", 8u8),
        ("172.16.0.0", 12),
        ("192.168.1.0", 24),
        ("0.0.0.0", 0),
        ("255.255.0.0", 16),
    ];
    for (base, prefix) in bases {
        let network = Ipv4Addr::from(to_integer(base).unwrap());
        let lo = u32::from(network) as u64;
        let hi = lo + (1u64 << (32 - prefix)) - 1;

        for count in SUBNET_COUNT_CHOICES {
            let subnets = partition_subnets(network, prefix, count).unwrap();
            assert_eq!(subnets.len(), count as usize);

            let mut expected_next = lo;
            for s in &subnets {
                let start = u32::from(s.network_address) as u64;
                let end = u32::from(s.broadcast_address) as u64;
                assert_eq!(start, expected_next, "{base}/{prefix} x{count} gap or overlap");
                assert!(end >= start);
                expected_next = end + 1;
            }
            assert_eq!(expected_next - 1, hi, "{base}/{prefix} x{count} not covered");
        }
    }
}

#[test]
fn test_codec_round_trip() {
    let samples = [0u32, 1, 255, 256, 65_535, 0x0A00_0001, 0xC0A8_0067, 0x7FFF_FFFF, u32::MAX];
    for v in samples {
        assert_eq!(to_integer(&to_dotted_quad(v)).unwrap(), v);
    }
}

#[test]
fn test_mask_round_trip() {
    for p in 0..=32u8 {
        assert_eq!(mask_to_prefix(prefix_to_mask(p).unwrap()), p);
    }
}

#[test]
fn test_classify_examples() {
    let class_of = |addr: &str| compute(addr, 24, 1).unwrap().ip_class;
    assert_eq!(class_of("10.1.1.1"), IpClass::A);
    assert_eq!(class_of("172.16.1.1"), IpClass::B);
    assert_eq!(class_of("192.0.2.1"), IpClass::C);
    assert_eq!(class_of("224.0.0.1"), IpClass::D);
    assert_eq!(class_of("250.1.1.1"), IpClass::E);
    assert_eq!(class_of("127.0.0.1"), IpClass::Unknown);
}

#[test]
fn test_binary_rendering() {
    assert_eq!(
        to_binary_string([192, 168, 0, 103]),
        "11000000.10101000.00000000.01100111"
    );
}

#[test]
fn test_idempotent() {
    for count in SUBNET_COUNT_CHOICES {
        let a = compute("10.200.3.4", 16, count).unwrap();
        let b = compute("10.200.3.4", 16, count).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        compute("10.0.0", 24, 1),
        Err(CalcError::InvalidAddressFormat(_))
    ));
    assert!(matches!(
        compute("10.0.x.1", 24, 1),
        Err(CalcError::InvalidAddressFormat(_))
    ));
    assert!(matches!(
        compute("10.0.0.256", 24, 1),
        Err(CalcError::OctetOutOfRange { octet: 3, .. })
    ));
    assert_eq!(
        compute("10.0.0.1", 33, 1).unwrap_err(),
        CalcError::PrefixOutOfRange(33)
    );
    assert_eq!(
        compute("10.0.0.1", 28, 64).unwrap_err(),
        CalcError::SubnetOverflow {
            prefix: 28,
            extra_bits: 6
        }
    );
    assert_eq!(
        compute_with("10.0.0.1", &MaskSource::Mask("255.255.0.255".into()), 1).unwrap_err(),
        CalcError::InvalidMask("255.255.0.255".to_string())
    );
}

#[test]
fn test_subnet_count_limited_to_offered_choices() {
    assert_eq!(
        compute("192.168.1.0", 24, 3).unwrap_err(),
        CalcError::InvalidSubnetCount(3)
    );
    assert_eq!(
        compute("0.0.0.0", 0, u32::MAX).unwrap_err(),
        CalcError::InvalidSubnetCount(u32::MAX)
    );
    assert_eq!(
        compute("10.0.0.0", 8, 1 << 24).unwrap_err(),
        CalcError::InvalidSubnetCount(1 << 24)
    );
    for count in SUBNET_COUNT_CHOICES {
        assert!(compute("10.0.0.0", 8, count).is_ok(), "count {count}");
    }
}

#[test]
fn test_cidr_suffix_conflicting_with_prefix() {
    assert!(matches!(
        compute("10.0.0.1/8", 24, 1),
        Err(CalcError::InvalidAddressFormat(_))
    ));
    assert_eq!(compute("10.0.0.1/24", 24, 1).unwrap().prefix_length, 24);
}

#[test]
fn test_mask_sources_agree() {
    let by_prefix = compute("172.20.1.1", 16, 4).unwrap();
    let by_mask = compute_with("172.20.1.1", &MaskSource::Mask("255.255.0.0".into()), 4).unwrap();
    let by_class = compute_with("172.20.1.1", &MaskSource::Classful, 4).unwrap();
    let by_cidr = compute_with("172.20.1.1/16", &MaskSource::SplitDefault, 4).unwrap();
    assert_eq!(by_prefix, by_mask);
    assert_eq!(by_prefix, by_class);
    assert_eq!(by_prefix, by_cidr);
}

#[test]
fn test_point_to_point_prefixes_kept_as_computed() {
    assert_eq!(compute("10.0.0.0", 31, 1).unwrap().host_count, 0);
    assert_eq!(compute("10.0.0.0", 32, 1).unwrap().host_count, -1);
}

#[test]
fn test_render_formats() {
    let info = compute("192.168.1.10", 24, 4).unwrap();

    let csv = render(OutputFormat::Csv, Some(&info)).unwrap();
    assert_eq!(csv.lines().count(), 5);

    let json = render(OutputFormat::Json, Some(&info)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["subnets"][3]["broadcast_address"], "192.168.1.255");

    let text = render(OutputFormat::Text, None).unwrap();
    assert!(text.contains('-'));
    assert!(!text.contains("192.168"));
}
