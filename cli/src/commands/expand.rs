use std::io::{self, Write};

use addrq_common::{Config, parse_query_with};
use anyhow::Context;

/// Writes one `host:port` per line to stdout so the output can be piped.
pub fn expand(query: &str, cfg: &Config) -> anyhow::Result<()> {
    let addresses = parse_query_with(query, cfg).with_context(|| format!("invalid query `{query}`"))?;

    let mut out = io::stdout().lock();
    for address in &addresses {
        writeln!(out, "{address}")?;
    }
    out.flush()?;

    Ok(())
}
