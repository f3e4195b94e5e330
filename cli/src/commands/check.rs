use addrq_common::{Config, parse_query_with};
use anyhow::Context;
use colored::*;
use tracing::{info, warn};

pub fn check(query: &str, cfg: &Config) -> anyhow::Result<()> {
    let addresses = parse_query_with(query, cfg).with_context(|| format!("invalid query `{query}`"))?;

    let len = addresses.len();
    let unit = if len == 1 { "address" } else { "addresses" };
    info!("Query is valid and expands to {} {unit}", len.to_string().green().bold());

    if let (Some(first), Some(last)) = (addresses.first(), addresses.last()) {
        info!("First: {}", first.to_string().bold());
        info!("Last:  {}", last.to_string().bold());
    }

    if !cfg.reject_empty_segments && query.split(',').any(str::is_empty) {
        warn!("Query has an empty segment, read as `:80`");
    }

    Ok(())
}
