use thiserror::Error;

/// Errors raised while parsing an address or a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// A single `[host]:[port]` token is malformed.
    #[error("error while parsing `{0}`: address must be formatted as [host]:[port] with 0 <= port <= 65535")]
    InvalidAddress(String),
    /// A range segment is malformed or its endpoints don't form a valid span.
    #[error(
        "error while parsing `{0}`: address range must be formatted as [host1]:[port1]-[host2]:[port2] with host1 <= host2 and port1 < port2"
    )]
    InvalidAddressRange(String),
    /// A well-formed query expands past [`Config::max_addresses`](crate::Config::max_addresses).
    ///
    /// Only returned by [`parse_query_with`](crate::parse_query_with) when a cap is set.
    #[error("query expands to {total} addresses, more than the configured limit of {max}")]
    AddressLimitExceeded { total: u64, max: usize },
}

pub type Result<T> = std::result::Result<T, AddressError>;
