//! Runs triggers end to end: launch, wait, classify.

use crashprobe_common::crash::CrashKind;
use tracing::{Instrument, debug, info_span, warn};

use crate::error::ProbeError;
use crate::launcher::Launcher;
use crate::report::{CrashReport, Verdict};
use crate::termination::Termination;

/// Runs one trigger in a child and records how it died.
pub async fn probe(launcher: &dyn Launcher, kind: CrashKind) -> Result<CrashReport, ProbeError> {
    let span = info_span!("probe", %kind);

    async move {
        let run = launcher.launch(kind).await?;
        let report = CrashReport {
            kind,
            termination: Termination::from_status(run.status),
            stdout: String::from_utf8_lossy(&run.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&run.stderr).into_owned(),
            elapsed: run.elapsed,
        };

        match report.verdict() {
            Verdict::Confirmed(fault) => {
                debug!(%fault, termination = %report.termination, "Crash confirmed")
            }
            verdict => warn!(%verdict, stderr = ?report.last_stderr_line(), "Crash not confirmed"),
        }

        Ok::<_, ProbeError>(report)
    }
    .instrument(span)
    .await
}

/// Runs every trigger in `kinds`, one child at a time.
///
/// `on_report` is called as soon as each report is ready, before the next child starts.
pub async fn probe_all(
    launcher: &dyn Launcher,
    kinds: &[CrashKind],
    on_report: Option<Box<dyn Fn(&CrashReport) + Send + Sync>>,
) -> Result<Vec<CrashReport>, ProbeError> {
    let mut reports = Vec::with_capacity(kinds.len());

    for &kind in kinds {
        let report = probe(launcher, kind).await?;
        if let Some(callback) = &on_report {
            callback(&report);
        }
        reports.push(report);
    }

    Ok(reports)
}
