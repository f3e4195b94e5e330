/// Options for [`parse_query_with`](crate::parse_query_with).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Upper bound on the number of addresses a single query may produce.
    ///
    /// `None` imposes no limit; a wide IPv4 span is then the caller's problem.
    pub max_addresses: Option<usize>,
    /// Fail on empty segments (`"a,,b"`, trailing commas) instead of reading
    /// them as `:80`.
    pub reject_empty_segments: bool,
}
