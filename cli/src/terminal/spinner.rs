use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_strings(TICKS));
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    })
}

pub fn report_probe_progress(done: usize, total: usize, current: &str) {
    get_spinner().set_message(format!(
        "Crashing {} ({}/{})",
        current.bright_cyan().bold(),
        done + 1,
        total
    ));
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Writes log lines above the spinner instead of through it.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match SPINNER.get() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| io::stderr().write_all(buf))?,
            _ => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
