//! End-to-end checks: every trigger runs in a child copy of this test binary,
//! and the parent classifies how that child died.

use std::time::Duration;

use crashprobe_common::crash::{CrashKind, DIAGNOSTIC_LINE, FaultClass};
use crashprobe_core::hardening;
use crashprobe_core::launcher::{self, SelfExecLauncher};
use crashprobe_core::probe;
use crashprobe_core::report::Verdict;
use crashprobe_plugins::object::NativeObject;

const CHILD_TEST: &str = "crash::integration::crash_child";
const SYMBOL_CHILD_TEST: &str = "crash::integration::symbol_child";
const DESCRIBE_CHILD_TEST: &str = "crash::integration::describe_action_child";

// Resolved by name at link time, as a C host would.
unsafe extern "C" {
    fn NativeDescribeAction();
    fn CauseNullVirtualCallCrash();
    fn CauseNullPointerCrash();
    fn CauseInvalidMemoryAccessCrash();
    fn CauseInvalidFunctionPointerCrash();
    fn CauseIllegalInstructionCrash();
    fn CauseAbortCrash();
    fn CauseStackOverflowCrash();
    fn CauseUncaughtExceptionCrash();
    fn CauseDivideByZeroCrash();
}

fn exported_symbol(kind: CrashKind) -> unsafe extern "C" fn() {
    match kind {
        CrashKind::NullVirtualCall => CauseNullVirtualCallCrash,
        CrashKind::NullPointer => CauseNullPointerCrash,
        CrashKind::InvalidMemoryAccess => CauseInvalidMemoryAccessCrash,
        CrashKind::InvalidFunctionPointer => CauseInvalidFunctionPointerCrash,
        CrashKind::IllegalInstruction => CauseIllegalInstructionCrash,
        CrashKind::Abort => CauseAbortCrash,
        CrashKind::StackOverflow => CauseStackOverflowCrash,
        CrashKind::UncaughtPanic => CauseUncaughtExceptionCrash,
        CrashKind::DivideByZero => CauseDivideByZeroCrash,
    }
}

fn launcher_for(test: &str) -> SelfExecLauncher {
    SelfExecLauncher::current_exe()
        .expect("test binary path")
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .timeout(Duration::from_secs(30))
}

fn child_launcher() -> SelfExecLauncher {
    launcher_for(CHILD_TEST)
}

/// Only does something in a child started by [`child_launcher`]; in a normal
/// test run the trigger variable is unset and this returns at once.
#[test]
fn crash_child() {
    let Ok(kind) = launcher::requested_kind() else {
        return;
    };

    hardening::suppress_core_dumps().expect("failed to disable core dumps");
    crashprobe_plugins::trigger(kind);
}

/// Like [`crash_child`], but enters through the unmangled C symbol.
#[test]
fn symbol_child() {
    let Ok(kind) = launcher::requested_kind() else {
        return;
    };

    hardening::suppress_core_dumps().expect("failed to disable core dumps");
    unsafe { exported_symbol(kind)() };
}

/// Runs the control entry through its C symbol when started by a parent.
#[test]
fn describe_action_child() {
    if launcher::requested_kind().is_err() {
        return;
    }

    unsafe { NativeDescribeAction() };
}

#[tokio::test]
async fn null_virtual_call_is_a_memory_fault() {
    let report = probe::probe(&child_launcher(), CrashKind::NullVirtualCall)
        .await
        .unwrap();

    assert_eq!(
        report.verdict(),
        Verdict::Confirmed(FaultClass::MemoryAccess),
        "child ended with {} (stderr: {:?})",
        report.termination,
        report.last_stderr_line()
    );
    assert!(
        !report.diagnostic_emitted(),
        "the virtual method body ran before the fault"
    );
}

#[tokio::test]
async fn every_catalog_entry_crashes_as_expected() {
    let reports = probe::probe_all(&child_launcher(), &CrashKind::ALL, None)
        .await
        .unwrap();

    let failures: Vec<String> = reports
        .iter()
        .filter(|report| !report.is_confirmed())
        .map(|report| format!("{}: {}", report.kind, report.verdict()))
        .collect();

    assert_eq!(reports.len(), CrashKind::ALL.len());
    assert!(failures.is_empty(), "unconfirmed crashes: {failures:#?}");
}

#[test]
fn control_call_on_a_valid_object_returns() {
    let object = NativeObject::base();
    let mut out = Vec::new();

    object.describe_action(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), format!("{DIAGNOSTIC_LINE}\n"));
}

#[tokio::test]
async fn exported_null_virtual_call_faults_before_the_method_body() {
    let report = probe::probe(&launcher_for(SYMBOL_CHILD_TEST), CrashKind::NullVirtualCall)
        .await
        .unwrap();

    assert_eq!(
        report.verdict(),
        Verdict::Confirmed(FaultClass::MemoryAccess),
        "child ended with {} (stderr: {:?})",
        report.termination,
        report.last_stderr_line()
    );
    assert!(!report.diagnostic_emitted());
}

#[tokio::test]
async fn every_exported_symbol_crashes_as_expected() {
    let reports = probe::probe_all(&launcher_for(SYMBOL_CHILD_TEST), &CrashKind::ALL, None)
        .await
        .unwrap();

    let failures: Vec<String> = reports
        .iter()
        .filter(|report| !report.is_confirmed())
        .map(|report| format!("{}: {}", report.kind.symbol(), report.verdict()))
        .collect();

    assert!(failures.is_empty(), "unconfirmed crashes: {failures:#?}");
}

#[tokio::test]
async fn exported_control_entry_writes_the_line_and_returns() {
    // The kind only switches the child on; the control entry ignores it.
    let report = probe::probe(&launcher_for(DESCRIBE_CHILD_TEST), CrashKind::NullVirtualCall)
        .await
        .unwrap();

    assert_eq!(report.verdict(), Verdict::Survived, "child ended with {}", report.termination);
    assert!(report.diagnostic_emitted(), "stdout: {:?}", report.stdout);
}
