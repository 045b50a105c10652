//! # Crash Catalog
//!
//! Names every native crash the plugin can raise on purpose.
//!
//! Each [`CrashKind`] maps to:
//! * A kebab-case name used on the command line (e.g. `null-virtual-call`).
//! * The C symbol exported by the plugin (e.g. `CauseNullVirtualCallCrash`).
//! * The fault classes a crash reporter should observe when it fires.
//!
//! Hosts written against the plugin usually wrap each symbol in a `Trigger…`
//! method, so those names are accepted as well.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The line the plugin's virtual method writes when its body runs.
pub const DIAGNOSTIC_LINE: &str = "[Native]: Base::DoSomething called";

/// The family of fault a crash belongs to, as seen from outside the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultClass {
    /// Invalid memory access: SIGSEGV or SIGBUS on Unix, access violation on Windows.
    MemoryAccess,
    /// The CPU refused to decode an instruction: SIGILL.
    IllegalInstruction,
    /// The process aborted itself: SIGABRT, or a fail-fast exception on Windows.
    Abort,
}

impl fmt::Display for FaultClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FaultClass::MemoryAccess => "memory access",
            FaultClass::IllegalInstruction => "illegal instruction",
            FaultClass::Abort => "abort",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrashKind {
    /// Calls a virtual method through a null object reference.
    NullVirtualCall,
    /// Writes through a null pointer.
    NullPointer,
    /// Reads from an unmapped low address.
    InvalidMemoryAccess,
    /// Jumps to an address that holds no code.
    InvalidFunctionPointer,
    /// Executes an undefined opcode.
    IllegalInstruction,
    /// Calls `abort()`.
    Abort,
    /// Recurses until the stack guard page is hit.
    StackOverflow,
    /// Panics inside a function that cannot unwind.
    UncaughtPanic,
    /// Divides an integer by zero.
    DivideByZero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrashKindError {
    #[error("unknown crash kind: '{0}' (run `crashprobe list` for the catalog)")]
    Unknown(String),
}

impl CrashKind {
    pub const ALL: [CrashKind; 9] = [
        CrashKind::NullVirtualCall,
        CrashKind::NullPointer,
        CrashKind::InvalidMemoryAccess,
        CrashKind::InvalidFunctionPointer,
        CrashKind::IllegalInstruction,
        CrashKind::Abort,
        CrashKind::StackOverflow,
        CrashKind::UncaughtPanic,
        CrashKind::DivideByZero,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CrashKind::NullVirtualCall => "null-virtual-call",
            CrashKind::NullPointer => "null-pointer",
            CrashKind::InvalidMemoryAccess => "invalid-memory-access",
            CrashKind::InvalidFunctionPointer => "invalid-function-pointer",
            CrashKind::IllegalInstruction => "illegal-instruction",
            CrashKind::Abort => "abort",
            CrashKind::StackOverflow => "stack-overflow",
            CrashKind::UncaughtPanic => "uncaught-panic",
            CrashKind::DivideByZero => "divide-by-zero",
        }
    }

    /// The unmangled symbol the plugin exports for this crash.
    pub fn symbol(self) -> &'static str {
        match self {
            CrashKind::NullVirtualCall => "CauseNullVirtualCallCrash",
            CrashKind::NullPointer => "CauseNullPointerCrash",
            CrashKind::InvalidMemoryAccess => "CauseInvalidMemoryAccessCrash",
            CrashKind::InvalidFunctionPointer => "CauseInvalidFunctionPointerCrash",
            CrashKind::IllegalInstruction => "CauseIllegalInstructionCrash",
            CrashKind::Abort => "CauseAbortCrash",
            CrashKind::StackOverflow => "CauseStackOverflowCrash",
            CrashKind::UncaughtPanic => "CauseUncaughtExceptionCrash",
            CrashKind::DivideByZero => "CauseDivideByZeroCrash",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CrashKind::NullVirtualCall => "virtual call through a null object",
            CrashKind::NullPointer => "write through a null pointer",
            CrashKind::InvalidMemoryAccess => "read from an unmapped address",
            CrashKind::InvalidFunctionPointer => "call through a dangling function pointer",
            CrashKind::IllegalInstruction => "execute an undefined opcode",
            CrashKind::Abort => "abort the process",
            CrashKind::StackOverflow => "unbounded recursion",
            CrashKind::UncaughtPanic => "panic across the C boundary",
            CrashKind::DivideByZero => "integer division by zero",
        }
    }

    /// Fault classes a crash reporter may legitimately record for this kind.
    ///
    /// Stack overflow has two: the Rust runtime turns a guard page hit into an
    /// abort when it owns the thread, while a foreign host sees the raw fault.
    /// Illegal instruction falls back to an abort on targets without a known
    /// undefined opcode.
    pub fn expected_faults(self) -> &'static [FaultClass] {
        match self {
            CrashKind::NullVirtualCall
            | CrashKind::NullPointer
            | CrashKind::InvalidMemoryAccess
            | CrashKind::InvalidFunctionPointer => &[FaultClass::MemoryAccess],
            CrashKind::IllegalInstruction => {
                if cfg!(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")) {
                    &[FaultClass::IllegalInstruction]
                } else {
                    &[FaultClass::Abort]
                }
            }
            CrashKind::StackOverflow => &[FaultClass::Abort, FaultClass::MemoryAccess],
            CrashKind::Abort | CrashKind::UncaughtPanic | CrashKind::DivideByZero => {
                &[FaultClass::Abort]
            }
        }
    }

    pub fn expects(self, fault: FaultClass) -> bool {
        self.expected_faults().contains(&fault)
    }
}

impl fmt::Display for CrashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrashKind {
    type Err = CrashKindError;

    /// Parses a crash kind.
    ///
    /// Supported formats (case-insensitive):
    /// * **Name**: "null-virtual-call", "null_virtual_call".
    /// * **Symbol**: "CauseNullVirtualCallCrash".
    /// * **Host trigger**: "TriggerCauseNullVirtualCallCrash", "TriggerNullVirtualCallCrash".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase().replace('_', "-");

        if let Some(kind) = parse_name(&lower) {
            return Ok(kind);
        }

        if let Some(kind) = parse_symbol(&lower) {
            return Ok(kind);
        }

        Err(CrashKindError::Unknown(trimmed.to_string()))
    }
}

fn parse_name(s_lower: &str) -> Option<CrashKind> {
    CrashKind::ALL.into_iter().find(|kind| kind.name() == s_lower)
}

/// Matches exported symbols, with the host's `Trigger` prefix and with or without `Cause`.
fn parse_symbol(s_lower: &str) -> Option<CrashKind> {
    let bare = s_lower.strip_prefix("trigger").unwrap_or(s_lower);

    CrashKind::ALL.into_iter().find(|kind| {
        let symbol = kind.symbol().to_ascii_lowercase();
        let without_cause = symbol.strip_prefix("cause").unwrap_or(&symbol);
        bare == symbol || bare == without_cause
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
