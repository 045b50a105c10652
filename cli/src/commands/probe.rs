use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::Context;
use colored::*;
use crashprobe_common::config::Config;
use crashprobe_common::crash::CrashKind;
use crashprobe_common::{ALLOW_COREDUMPS_ENV, success};
use crashprobe_core::launcher::SelfExecLauncher;
use crashprobe_core::probe;
use crashprobe_core::report::CrashReport;

use crate::terminal::{colors, format, print, spinner};

pub async fn probe(kinds: Vec<CrashKind>, cfg: &Config) -> anyhow::Result<()> {
    let kinds: Vec<CrashKind> = if kinds.is_empty() {
        CrashKind::ALL.to_vec()
    } else {
        kinds
    };

    let mut launcher = SelfExecLauncher::current_exe()
        .context("failed to locate the running binary")?
        .args(["--no-banner", "-q", "trigger"])
        .timeout(cfg.timeout);
    if cfg.allow_coredumps {
        launcher = launcher.env(ALLOW_COREDUMPS_ENV, "1");
    }

    print::header("probing", cfg.quiet);

    let total: usize = kinds.len();
    let start_time: Instant = Instant::now();
    let quiet: u8 = cfg.quiet;
    let names: Vec<&'static str> = kinds.iter().map(|kind| kind.name()).collect();
    let finished = AtomicUsize::new(0);

    if let Some(first) = names.first() {
        spinner::report_probe_progress(0, total, first);
    }

    let on_report = move |report: &CrashReport| {
        let idx: usize = finished.fetch_add(1, Ordering::Relaxed);
        print_report(idx, report, quiet);
        if let Some(next) = names.get(idx + 1) {
            spinner::report_probe_progress(idx + 1, total, next);
        }
    };

    let result = probe::probe_all(&launcher, &kinds, Some(Box::new(on_report))).await;
    spinner::finish();
    let reports: Vec<CrashReport> = result.context("probe run failed")?;

    print_summary(&reports, start_time, cfg)
}

fn print_report(idx: usize, report: &CrashReport, quiet: u8) {
    if quiet >= 2 {
        return;
    }
    if idx > 0 {
        print::blank();
    }
    print::entry(idx, report.kind.name(), &format::report_to_details(report));
}

fn print_summary(reports: &[CrashReport], start_time: Instant, cfg: &Config) -> anyhow::Result<()> {
    let confirmed: usize = reports.iter().filter(|r| r.is_confirmed()).count();
    let total: usize = reports.len();
    let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
    let counts: ColoredString = format!("{confirmed}/{total} crashes").bold().green();
    let output: ColoredString =
        format!("Probe Complete: {counts} confirmed in {elapsed}").color(colors::TEXT_DEFAULT);

    print::summary(&output.to_string(), cfg.quiet);

    if confirmed != total {
        anyhow::bail!("{} of {total} crashes were not confirmed", total - confirmed);
    }

    success!("Every crash was recorded as expected");
    Ok(())
}
