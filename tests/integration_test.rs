//! Integration tests for netcider
//!
//! These tests verify the complete pipeline from CIDR string to rendered
//! output, plus the documented host-range conventions.

use netcider::cli::{self, Options};
use netcider::{AddrRange, Cidr, NetworkSummary};
use std::net::Ipv4Addr;

#[test]
fn test_scenario_192_168_0_2_24() {
    let cidr = Cidr::new("192.168.0.2/24").expect("Failed to parse CIDR");
    let summary = NetworkSummary::from_cidr(cidr);

    assert_eq!(summary.network, Ipv4Addr::new(192, 168, 0, 0));
    assert_eq!(summary.broadcast, Ipv4Addr::new(192, 168, 0, 255));
    assert_eq!(summary.netmask, Ipv4Addr::new(255, 255, 255, 0));
    assert_eq!(summary.host_min, Ipv4Addr::new(192, 168, 0, 1));
    assert_eq!(summary.host_max, Ipv4Addr::new(192, 168, 0, 254));
    assert_eq!(summary.usable_hosts, 254);
}

#[test]
fn test_scenario_point_to_point_31() {
    let summary = NetworkSummary::from_cidr(Cidr::new("10.0.0.0/31").expect("Failed to parse"));
    assert_eq!(summary.network, Ipv4Addr::new(10, 0, 0, 0));
    assert_eq!(summary.broadcast, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(summary.usable_hosts, 2);
}

#[test]
fn test_scenario_single_host_32() {
    let summary = NetworkSummary::from_cidr(Cidr::new("10.0.0.5/32").expect("Failed to parse"));
    assert_eq!(summary.network, Ipv4Addr::new(10, 0, 0, 5));
    assert_eq!(summary.broadcast, Ipv4Addr::new(10, 0, 0, 5));
    assert_eq!(summary.usable_hosts, 0);
}

#[test]
fn test_scenario_full_space_0() {
    // Size is checked arithmetically; no enumeration of the /0 here.
    let summary = NetworkSummary::from_cidr(Cidr::new("0.0.0.0/0").expect("Failed to parse"));
    assert_eq!(summary.network, Ipv4Addr::new(0, 0, 0, 0));
    assert_eq!(summary.broadcast, Ipv4Addr::new(255, 255, 255, 255));
    assert_eq!(summary.total_addresses, 4_294_967_296);
    assert_eq!(summary.addresses().remaining(), 4_294_967_296);
}

#[test]
fn test_malformed_inputs_fail() {
    for bad in ["300.1.1.1/24", "10.0.0.1/33", "1.2.3.4", "1.2.3/24", "a.b.c.d/8"] {
        assert!(Cidr::new(bad).is_err(), "{bad} should not parse");
    }
}

#[test]
fn test_enumeration_matches_size() {
    let cidr = Cidr::new("10.20.30.40/26").expect("Failed to parse");
    let addrs: Vec<Ipv4Addr> = AddrRange::from(cidr).collect();

    assert_eq!(addrs.len(), 64);
    assert_eq!(addrs.first(), Some(&cidr.network()));
    assert_eq!(addrs.last(), Some(&cidr.broadcast()));
    for pair in addrs.windows(2) {
        assert!(pair[0] < pair[1], "duplicate or descending: {pair:?}");
    }
}

#[test]
fn test_cli_summary_and_range() {
    let opts = cli::parse_args(vec!["-o".to_string(), "10.0.0.0/30".to_string()])
        .expect("Failed to parse args");
    let inputs = vec![opts.cidr.clone().expect("missing positional CIDR")];

    let mut buf = Vec::new();
    cli::run(&mut buf, &inputs, &opts).expect("run failed");
    let out = String::from_utf8(buf).expect("non-UTF8 output");

    assert!(out.contains("10.0.0.0/30"));
    assert!(out.contains("255.255.255.252"));
    assert!(out.ends_with("10.0.0.0\n10.0.0.1\n10.0.0.2\n10.0.0.3\n"));
}

#[test]
fn test_cli_json_output() {
    let opts = Options {
        format: cli::Format::Json,
        ..Options::default()
    };

    let mut buf = Vec::new();
    cli::run(&mut buf, &["192.168.0.2/24".to_string()], &opts).expect("run failed");
    let value: serde_json::Value = serde_json::from_slice(&buf).expect("invalid JSON");

    assert_eq!(value["cidr"], "192.168.0.2/24");
    assert_eq!(value["network"], "192.168.0.0");
    assert_eq!(value["total_addresses"], 256);
}

#[test]
fn test_cli_bad_input_emits_nothing() {
    let opts = Options::default();
    let mut buf = Vec::new();
    let result = cli::run(&mut buf, &["10.0.0.1/33".to_string()], &opts);

    assert!(result.is_err());
    assert!(buf.is_empty());
}
