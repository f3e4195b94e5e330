//! # Service Address Model
//!
//! A single `[host]:[port]` endpoint, e.g.
//! * `localhost`
//! * `192.168.1.22`
//! * `:3000`
//! * `localhost:3000`
//! * `192.168.1.22:3000`

use std::fmt;
use std::str::FromStr;

use crate::error::{AddressError, Result};

/// Port assumed when a token has no `:` at all.
pub const DEFAULT_PORT: u16 = 80;

/// A service endpoint. An empty `host` means "any host".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub(crate) host: String,
    pub(crate) port: u16,
}

impl Address {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Empty for "any host".
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Address {
    /// Always includes the port, so `localhost` renders as `localhost:80`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        parse_address(s)
    }
}

/// Parses one `[host]:[port]` token.
///
/// Without a colon the whole token is the host and the port defaults to
/// [`DEFAULT_PORT`]. A colon must be followed by decimal digits in `0..=65535`.
pub fn parse_address(s: &str) -> Result<Address> {
    let Some((host, port_str)) = s.split_once(':') else {
        return Ok(Address::new(s, DEFAULT_PORT));
    };

    // IPv6 literals land here too; they collide with the port delimiter.
    if port_str.contains(':') {
        return Err(AddressError::InvalidAddress(s.to_string()));
    }
    if port_str.is_empty() {
        return Err(AddressError::InvalidAddress(s.to_string()));
    }

    let port = parse_port(port_str)?;
    Ok(Address::new(host, port))
}

fn parse_port(port_str: &str) -> Result<u16> {
    if !port_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidAddress(port_str.to_string()));
    }

    port_str
        .parse::<u16>()
        .map_err(|_| AddressError::InvalidAddress(port_str.to_string()))
}
