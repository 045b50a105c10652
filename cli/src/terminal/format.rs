use std::time::Duration;

use crate::terminal::colors;
use colored::*;
use crashprobe_common::crash::{CrashKind, FaultClass};
use crashprobe_core::report::{CrashReport, Verdict};

pub type Detail = (String, ColoredString);

pub fn faults_to_string(faults: &[FaultClass]) -> String {
    faults
        .iter()
        .map(|fault| fault.to_string())
        .collect::<Vec<String>>()
        .join(" or ")
}

pub fn verdict_to_colored(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Confirmed(_) => verdict.to_string().color(colors::CONFIRMED).bold(),
        Verdict::Unexpected(_) => verdict.to_string().color(colors::UNEXPECTED).bold(),
        Verdict::Survived => verdict.to_string().color(colors::SURVIVED).bold(),
    }
}

pub fn elapsed_to_string(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

pub fn kind_to_details(kind: CrashKind) -> Vec<Detail> {
    vec![
        ("Symbol".to_string(), kind.symbol().color(colors::SYMBOL)),
        ("Action".to_string(), kind.description().normal()),
        (
            "Fault".to_string(),
            faults_to_string(kind.expected_faults()).normal(),
        ),
    ]
}

pub fn report_to_details(report: &CrashReport) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Symbol".to_string(), report.kind.symbol().color(colors::SYMBOL)),
        ("Status".to_string(), report.termination.to_string().normal()),
        ("Verdict".to_string(), verdict_to_colored(report.verdict())),
        ("Time".to_string(), elapsed_to_string(report.elapsed).normal()),
    ];

    if report.diagnostic_emitted() {
        details.push((
            "Output".to_string(),
            "virtual method body ran before the crash".yellow(),
        ));
    }

    if let Some(line) = report.last_stderr_line() {
        details.push(("Stderr".to_string(), line.to_string().dimmed()));
    }

    details
}
