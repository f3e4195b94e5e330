use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Logs a centered, ruled section title.
pub fn header(title: &str) {
    let text = format!(" {} ", title.to_uppercase());
    let side = TOTAL_WIDTH.saturating_sub(text.chars().count()) / 2;
    let sep = "─".repeat(side);

    info!("{}{}{}", sep.bright_black(), text.bright_green().bold(), sep.bright_black());
}
