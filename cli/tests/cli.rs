//! Drives the real binary and checks how it ends.

use std::process::{Command, Output};

use crashprobe_common::crash::DIAGNOSTIC_LINE;

fn crashprobe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crashprobe"))
        .args(["--no-banner", "-q"])
        .args(args)
        .env_remove("CRASHPROBE_TRIGGER")
        .env_remove("CRASHPROBE_ALLOW_COREDUMPS")
        .output()
        .expect("failed to run crashprobe")
}

#[test]
fn describe_writes_the_diagnostic_line_and_returns() {
    let output = crashprobe(&["describe"]);

    assert!(output.status.success(), "describe failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{DIAGNOSTIC_LINE}\n"));
}

#[test]
fn list_names_every_symbol() {
    let output = crashprobe(&["list"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("CauseNullVirtualCallCrash"));
    assert!(stderr.contains("null-virtual-call"));
}

#[test]
fn trigger_without_kind_fails_cleanly() {
    let output = crashprobe(&["trigger"]);

    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn null_virtual_call_segfaults_without_output() {
    use std::os::unix::process::ExitStatusExt;

    let output = crashprobe(&["trigger", "null-virtual-call"]);
    let signal = output.status.signal();

    assert!(
        matches!(signal, Some(libc::SIGSEGV) | Some(libc::SIGBUS)),
        "expected a memory fault, got {:?}",
        output.status
    );
    assert!(output.stdout.is_empty(), "trigger wrote to stdout before faulting");
    assert!(
        output.stderr.is_empty(),
        "trigger wrote to stderr before faulting: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[cfg(unix)]
#[test]
fn very_quiet_trigger_stays_silent() {
    use std::os::unix::process::ExitStatusExt;

    let output = crashprobe(&["-qq", "trigger", "abort"]);

    assert_eq!(output.status.signal(), Some(libc::SIGABRT));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[cfg(unix)]
#[test]
fn trigger_reads_the_kind_from_the_environment() {
    use std::os::unix::process::ExitStatusExt;

    let output = Command::new(env!("CARGO_BIN_EXE_crashprobe"))
        .args(["--no-banner", "-q", "trigger"])
        .env("CRASHPROBE_TRIGGER", "abort")
        .output()
        .expect("failed to run crashprobe");

    assert_eq!(output.status.signal(), Some(libc::SIGABRT));
}

#[cfg(unix)]
#[test]
fn probe_confirms_the_selected_crashes() {
    let output = crashprobe(&["probe", "null-virtual-call", "abort", "uncaught-panic"]);

    assert!(
        output.status.success(),
        "probe reported a mismatch:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
