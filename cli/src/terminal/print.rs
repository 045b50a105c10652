//! Line-oriented output for the catalog and probe reports.
//!
//! Everything here goes through the `tracing` subscriber under [`PRINT_TARGET`],
//! which the formatter writes verbatim to stderr.

use colored::*;
use crashprobe_common::config::Config;
use tracing::info;

use crate::terminal::format::Detail;
use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "crashprobe::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn blank() {
    print("");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let title = format!(" CRASHPROBE v{} ", env!("CARGO_PKG_VERSION"));
    print(&centered(&title, '═').bright_green().bold().to_string());
    banner::print();
}

/// `──── TITLE ────`, hidden under `-q`.
pub fn header(title: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let line = centered(&format!("⟦ {} ⟧", title.to_uppercase()), '─');
    print(&line.color(colors::SEPARATOR).to_string());
}

pub fn rule() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// One numbered catalog or report entry with its details as a tree.
///
/// ```text
/// [0] null-virtual-call
///  ├─ Symbol..: CauseNullVirtualCallCrash
///  └─ Fault...: memory access
/// ```
pub fn entry(idx: usize, name: &str, details: &[Detail]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));

    let width = key_width(details);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {} {}",
            branch.color(colors::SEPARATOR),
            dotted_key(key, width),
            value
        ));
    }
}

/// Flat `> Key...: value` lines sharing one key column.
pub fn fields(details: &[Detail]) {
    let width = key_width(details);
    for (key, value) in details {
        print(&format!("{} {} {}", ">".color(colors::SEPARATOR), dotted_key(key, width), value));
    }
}

/// The closing line of a run: framed and centered normally, a plain status line under `-q`.
pub fn summary(line: &str, quiet: u8) {
    if quiet == 0 {
        rule();
        print(&centered(line, ' '));
    } else {
        blank();
        print(&format!("{} {}", ">".color(colors::SEPARATOR), line));
    }
}

fn key_width(details: &[Detail]) -> usize {
    details.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1
}

fn dotted_key(key: &str, width: usize) -> String {
    format!(
        "{}{}",
        key.color(colors::TEXT_DEFAULT),
        format!("{}:", ".".repeat(width.saturating_sub(key.len()))).color(colors::SEPARATOR)
    )
}

/// Pads `text` on both sides with `fill` up to [`TOTAL_WIDTH`] visible columns.
fn centered(text: &str, fill: char) -> String {
    let pad = TOTAL_WIDTH.saturating_sub(console::measure_text_width(text));
    let left = pad / 2;
    let fill = fill.to_string();
    format!("{}{}{}", fill.repeat(left), text, fill.repeat(pad - left))
}
