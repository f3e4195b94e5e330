use std::net::Ipv4Addr;

/// Inclusive span of IPv4 addresses, ordered by their 32-bit big-endian value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    /// Returns `None` when `end_addr` sorts before `start_addr`.
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Option<Self> {
        if u32::from(end_addr) < u32::from(start_addr) {
            return None;
        }
        Some(Self {
            start_addr,
            end_addr,
        })
    }

    /// Number of addresses in the span. Never zero.
    pub fn len(&self) -> u64 {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        u64::from(end - start) + 1
    }

    /// Always `false`; a range holds at least its start address.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_iter(&self) -> impl Iterator<Item = Ipv4Addr> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }
}

/// Reads a host as a dotted-quad IPv4 literal, if it is one.
pub fn parse_ipv4_host(host: &str) -> Option<Ipv4Addr> {
    host.parse::<Ipv4Addr>().ok()
}
