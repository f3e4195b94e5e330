//! Parses compact endpoint queries such as `:6379,:3000-:3003,10.0.0.1:80-10.0.0.4:81`
//! into an ordered list of [`Address`] values.
//!
//! A query is a comma separated list of segments. Each segment is either a single
//! `[host]:[port]` spec or a range of two specs joined by `-`. Ranges expand
//! host-major, port-minor; hosts only expand when both endpoints are IPv4 literals.

pub mod config;
pub mod error;
pub mod network;

pub use config::Config;
pub use error::AddressError;
pub use network::address::{Address, parse_address};
pub use network::query::{parse_query, parse_query_with};
