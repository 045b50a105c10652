use std::fmt;
use std::time::Duration;

use crashprobe_common::crash::{CrashKind, DIAGNOSTIC_LINE, FaultClass};

use crate::termination::Termination;

/// Everything the parent learned about one child.
#[derive(Debug, Clone)]
pub struct CrashReport {
    pub kind: CrashKind,
    pub termination: Termination,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The child crashed with a fault the catalog expects for its kind.
    Confirmed(FaultClass),
    /// The child died abnormally, but not in the expected way.
    Unexpected(Termination),
    /// The child exited cleanly: the trigger did not crash.
    Survived,
}

impl CrashReport {
    pub fn verdict(&self) -> Verdict {
        match self.termination.fault_class() {
            Some(fault) if self.kind.expects(fault) => Verdict::Confirmed(fault),
            _ if self.termination.is_abnormal() => Verdict::Unexpected(self.termination),
            _ => Verdict::Survived,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.verdict(), Verdict::Confirmed(_))
    }

    /// Whether the body of the virtual method ran before the child died.
    ///
    /// A null virtual call must fault while resolving the table, so a confirmed
    /// `null-virtual-call` report never carries the marker.
    pub fn diagnostic_emitted(&self) -> bool {
        self.stdout.contains(DIAGNOSTIC_LINE)
    }

    /// The last non-empty line the child wrote to stderr, usually the runtime's
    /// own account of the crash (panic message, stack overflow notice).
    pub fn last_stderr_line(&self) -> Option<&str> {
        self.stderr.lines().rev().map(str::trim).find(|line| !line.is_empty())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Confirmed(fault) => write!(f, "confirmed ({fault})"),
            Verdict::Unexpected(termination) => write!(f, "unexpected: {termination}"),
            Verdict::Survived => write!(f, "survived"),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn report(kind: CrashKind, termination: Termination) -> CrashReport {
        CrashReport {
            kind,
            termination,
            stdout: String::new(),
            stderr: String::new(),
            elapsed: Duration::from_millis(5),
        }
    }

    fn signaled(signal: i32) -> Termination {
        Termination::Signaled {
            signal,
            core_dumped: false,
        }
    }

    #[test]
    fn segfault_confirms_null_virtual_call() {
        let report = report(CrashKind::NullVirtualCall, signaled(libc::SIGSEGV));

        assert_eq!(report.verdict(), Verdict::Confirmed(FaultClass::MemoryAccess));
        assert!(report.is_confirmed());
        assert!(!report.diagnostic_emitted());
    }

    #[test]
    fn abort_does_not_confirm_a_memory_fault() {
        let report = report(CrashKind::NullVirtualCall, signaled(libc::SIGABRT));

        assert_eq!(report.verdict(), Verdict::Unexpected(signaled(libc::SIGABRT)));
        assert!(!report.is_confirmed());
    }

    #[test]
    fn stack_overflow_accepts_both_outcomes() {
        let aborted = report(CrashKind::StackOverflow, signaled(libc::SIGABRT));
        let faulted = report(CrashKind::StackOverflow, signaled(libc::SIGSEGV));

        assert!(aborted.is_confirmed());
        assert!(faulted.is_confirmed());
    }

    #[test]
    fn clean_exit_survives() {
        let report = report(CrashKind::Abort, Termination::Exited(0));
        assert_eq!(report.verdict(), Verdict::Survived);
    }

    #[test]
    fn non_zero_exit_is_unexpected() {
        let report = report(CrashKind::UncaughtPanic, Termination::Exited(101));
        assert_eq!(report.verdict(), Verdict::Unexpected(Termination::Exited(101)));
    }

    #[test]
    fn diagnostic_marker_is_detected() {
        let mut report = report(CrashKind::NullVirtualCall, Termination::Exited(0));
        report.stdout = format!("{DIAGNOSTIC_LINE}\n");

        assert!(report.diagnostic_emitted());
    }

    #[test]
    fn last_stderr_line_skips_blank_lines() {
        let mut report = report(CrashKind::UncaughtPanic, signaled(libc::SIGABRT));
        report.stderr = "thread 'main' panicked\npanic in a function that cannot unwind\n\n".into();

        assert_eq!(
            report.last_stderr_line(),
            Some("panic in a function that cannot unwind")
        );
    }
}
