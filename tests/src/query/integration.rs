#![cfg(test)]
use addrq_common::{Address, AddressError, Config, parse_address, parse_query, parse_query_with};

use crate::util::rendered;

/// Every form of segment in one query, including an IPv4 span that crosses
/// from 192.168.1.x into 192.168.2.x.
#[test]
fn mixed_query_expands_in_segment_order() -> anyhow::Result<()> {
    let query =
        ":6379,:3000-:3003,localhost:3000-:3003,192.168.1.126:3000-:3003,192.168.1.254:3000-192.168.2.1:3001";

    let addresses = parse_query(query)?;

    assert_eq!(
        rendered(&addresses),
        vec![
            ":6379",
            ":3000",
            ":3001",
            ":3002",
            ":3003",
            "localhost:3000",
            "localhost:3001",
            "localhost:3002",
            "localhost:3003",
            "192.168.1.126:3000",
            "192.168.1.126:3001",
            "192.168.1.126:3002",
            "192.168.1.126:3003",
            "192.168.1.254:3000",
            "192.168.1.254:3001",
            "192.168.1.255:3000",
            "192.168.1.255:3001",
            "192.168.2.0:3000",
            "192.168.2.0:3001",
            "192.168.2.1:3000",
            "192.168.2.1:3001",
        ]
    );
    Ok(())
}

#[test]
fn segments_do_not_interfere() -> anyhow::Result<()> {
    let left = parse_query("10.0.0.1:1-10.0.0.2:2")?;
    let right = parse_query("localhost:8080")?;
    let both = parse_query("10.0.0.1:1-10.0.0.2:2,localhost:8080")?;

    let expected: Vec<Address> = left.into_iter().chain(right).collect();
    assert_eq!(both, expected);
    Ok(())
}

#[test]
fn repeated_parses_are_identical() -> anyhow::Result<()> {
    let query = ":6379,192.168.1.26:3000-192.168.1.28:3001";
    assert_eq!(parse_query(query)?, parse_query(query)?);
    Ok(())
}

#[test]
fn single_address_round_trips_through_display() -> anyhow::Result<()> {
    for literal in ["localhost:3000", "192.168.1.22:0", "db.internal:65535", ":6379"] {
        let address = parse_address(literal)?;
        assert_eq!(address.to_string(), literal);
    }
    Ok(())
}

#[test]
fn first_error_aborts_whole_query() {
    let result = parse_query(":80,:3000-:3003,localhost-82,:9000");
    assert_eq!(result, Err(AddressError::InvalidAddressRange("82".into())));

    let result = parse_query(":80,localhost:-82");
    assert_eq!(result, Err(AddressError::InvalidAddress("localhost:".into())));
}

#[test]
fn error_messages_name_the_offending_input() {
    let err = parse_query(":3003-:3000").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("error while parsing `3003, 3000`"), "{msg}");
    assert!(msg.contains("port1 < port2"), "{msg}");

    let err = parse_address("localhost:http").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("error while parsing `http`"), "{msg}");
    assert!(msg.contains("0 <= port <= 65535"), "{msg}");
}

#[test]
fn config_limit_and_empty_segments() {
    let cfg = Config {
        max_addresses: Some(1_000),
        reject_empty_segments: true,
    };

    assert_eq!(
        parse_query_with("10.0.0.0:1-10.0.0.249:4", &cfg).map(|a| a.len()),
        Ok(1_000)
    );
    assert_eq!(
        parse_query_with("10.0.0.0:1-10.0.0.255:4", &cfg),
        Err(AddressError::AddressLimitExceeded {
            total: 1024,
            max: 1000
        })
    );
    assert_eq!(
        parse_query_with(":80,", &cfg),
        Err(AddressError::InvalidAddress(String::new()))
    );

    let lenient = Config::default();
    assert_eq!(
        rendered(&parse_query_with(":80,", &lenient).unwrap()),
        vec![":80", ":80"]
    );
}
