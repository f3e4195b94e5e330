//! # Address Query Expansion
//!
//! Turns a query such as `:6379,:3000-:3003,192.168.1.254:3000-192.168.2.1:3001`
//! into a flat, ordered list of [`Address`] values.
//!
//! Each comma separated segment is handled on its own and the results are
//! concatenated in segment order. A segment containing `-` is a range:
//! * `:3000-:3003` expands the ports of the "any" host.
//! * `localhost:3000-:3003` keeps `localhost` and expands the ports.
//! * `10.0.0.1:80-10.0.0.3:81` expands hosts (outer) and ports (inner).
//!
//! The first error aborts the whole query; no partial result is returned.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{AddressError, Result};
use crate::network::address::{Address, parse_address};
use crate::network::range::{Ipv4Range, parse_ipv4_host};

/// Parses a query with the default [`Config`] (no limit, empty segments read as `:80`).
pub fn parse_query(query: &str) -> Result<Vec<Address>> {
    parse_query_with(query, &Config::default())
}

/// Parses a comma separated query of addresses and address ranges.
pub fn parse_query_with(query: &str, cfg: &Config) -> Result<Vec<Address>> {
    let mut addresses: Vec<Address> = Vec::new();

    for segment in query.split(',') {
        if segment.is_empty() && cfg.reject_empty_segments {
            return Err(AddressError::InvalidAddress(String::new()));
        }

        if segment.contains('-') {
            let range = AddressRange::parse(segment)?;
            check_limit(addresses.len(), range.len(), cfg)?;
            debug!("Expanding `{segment}` into {} addresses", range.len());
            range.expand_into(&mut addresses);
        } else {
            let address = parse_address(segment)?;
            check_limit(addresses.len(), 1, cfg)?;
            trace!("Parsed `{segment}` as {address}");
            addresses.push(address);
        }
    }

    Ok(addresses)
}

/// Fails when adding `additional` addresses would push the result past the cap.
fn check_limit(produced: usize, additional: u64, cfg: &Config) -> Result<()> {
    let Some(max) = cfg.max_addresses else {
        return Ok(());
    };

    let total = (produced as u64).saturating_add(additional);
    if total > max as u64 {
        return Err(AddressError::AddressLimitExceeded { total, max });
    }
    Ok(())
}

/// Hosts covered by a range segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RangeHosts {
    /// Hostname, empty host, or mixed endpoints: no host expansion.
    Single(String),
    /// Both endpoints are IPv4 literals.
    Span(Ipv4Range),
}

/// A validated `spec1-spec2` segment, not yet expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AddressRange {
    hosts: RangeHosts,
    ports: RangeInclusive<u16>,
}

impl AddressRange {
    fn parse(segment: &str) -> Result<Self> {
        let mut parts = segment.split('-');
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(AddressError::InvalidAddressRange(segment.to_string()));
        };

        let start = parse_address(first)?;
        let end = parse_address(second)?;

        let start_ip = parse_ipv4_host(&start.host);
        let end_ip = parse_ipv4_host(&end.host);

        // The second host may be omitted, repeat the first, or open an IPv4 span.
        if end_ip.is_none() && !end.host.is_empty() && end.host != start.host {
            return Err(AddressError::InvalidAddressRange(end.host));
        }

        if start.port >= end.port {
            return Err(AddressError::InvalidAddressRange(format!(
                "{}, {}",
                start.port, end.port
            )));
        }

        let hosts = match (start_ip, end_ip) {
            (Some(start_addr), Some(end_addr)) => {
                let span = Ipv4Range::new(start_addr, end_addr).ok_or_else(|| {
                    AddressError::InvalidAddressRange(format!("{}, {}", start.host, end.host))
                })?;
                RangeHosts::Span(span)
            }
            _ => RangeHosts::Single(start.host),
        };

        Ok(Self {
            hosts,
            ports: start.port..=end.port,
        })
    }

    fn len(&self) -> u64 {
        let host_count = match &self.hosts {
            RangeHosts::Single(_) => 1,
            RangeHosts::Span(span) => span.len(),
        };
        let port_count = u64::from(self.ports.end() - self.ports.start()) + 1;
        host_count.saturating_mul(port_count)
    }

    /// Appends host-major, port-minor. Every address is a fresh value.
    fn expand_into(self, addresses: &mut Vec<Address>) {
        match self.hosts {
            RangeHosts::Single(host) => {
                addresses.extend(self.ports.map(|port| Address::new(host.clone(), port)));
            }
            RangeHosts::Span(span) => {
                for ip in span.to_iter() {
                    let host = ip.to_string();
                    addresses.extend(
                        self.ports
                            .clone()
                            .map(|port| Address::new(host.clone(), port)),
                    );
                }
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
