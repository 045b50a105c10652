//! How a child process ended, as seen by its parent.

use std::fmt;
use std::process::ExitStatus;

use crashprobe_common::crash::FaultClass;

#[cfg(windows)]
mod ntstatus {
    pub const ACCESS_VIOLATION: u32 = 0xC000_0005;
    pub const IN_PAGE_ERROR: u32 = 0xC000_0006;
    pub const ILLEGAL_INSTRUCTION: u32 = 0xC000_001D;
    pub const PRIVILEGED_INSTRUCTION: u32 = 0xC000_0096;
    pub const STACK_OVERFLOW: u32 = 0xC000_00FD;
    pub const INTEGER_DIVIDE_BY_ZERO: u32 = 0xC000_0094;
    pub const STACK_BUFFER_OVERRUN: u32 = 0xC000_0409;
    /// Status a CRT `abort()` exits with.
    pub const CRT_ABORT_EXIT: u32 = 3;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The process called `exit` (or returned from `main`) with this code.
    Exited(i32),
    /// The process was killed by a signal.
    Signaled { signal: i32, core_dumped: bool },
    /// The process was ended by an unhandled exception with this NTSTATUS.
    Exception(u32),
    /// The platform reported neither a code nor a signal.
    Unknown,
}

impl Termination {
    #[cfg(unix)]
    pub fn from_status(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return Termination::Signaled {
                signal,
                core_dumped: status.core_dumped(),
            };
        }

        match status.code() {
            Some(code) => Termination::Exited(code),
            None => Termination::Unknown,
        }
    }

    #[cfg(windows)]
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) if (code as u32) & 0xC000_0000 == 0xC000_0000 => {
                Termination::Exception(code as u32)
            }
            Some(code) => Termination::Exited(code),
            None => Termination::Unknown,
        }
    }

    #[cfg(not(any(unix, windows)))]
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Termination::Exited(code),
            None => Termination::Unknown,
        }
    }

    /// The fault family this termination belongs to, if it is a crash at all.
    pub fn fault_class(&self) -> Option<FaultClass> {
        match *self {
            Termination::Signaled { signal, .. } => signal_fault_class(signal),
            Termination::Exception(code) => exception_fault_class(code),
            #[cfg(windows)]
            Termination::Exited(code) if code as u32 == ntstatus::CRT_ABORT_EXIT => {
                Some(FaultClass::Abort)
            }
            Termination::Exited(_) | Termination::Unknown => None,
        }
    }

    /// True for anything but a clean `exit(0)`.
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Termination::Exited(0))
    }
}

#[cfg(unix)]
fn signal_fault_class(signal: i32) -> Option<FaultClass> {
    match signal {
        libc::SIGSEGV | libc::SIGBUS => Some(FaultClass::MemoryAccess),
        libc::SIGILL => Some(FaultClass::IllegalInstruction),
        libc::SIGABRT => Some(FaultClass::Abort),
        _ => None,
    }
}

#[cfg(not(unix))]
fn signal_fault_class(_signal: i32) -> Option<FaultClass> {
    None
}

#[cfg(windows)]
fn exception_fault_class(code: u32) -> Option<FaultClass> {
    match code {
        ntstatus::ACCESS_VIOLATION | ntstatus::IN_PAGE_ERROR | ntstatus::STACK_OVERFLOW => {
            Some(FaultClass::MemoryAccess)
        }
        ntstatus::ILLEGAL_INSTRUCTION | ntstatus::PRIVILEGED_INSTRUCTION => {
            Some(FaultClass::IllegalInstruction)
        }
        ntstatus::STACK_BUFFER_OVERRUN | ntstatus::INTEGER_DIVIDE_BY_ZERO => {
            Some(FaultClass::Abort)
        }
        _ => None,
    }
}

#[cfg(not(windows))]
fn exception_fault_class(_code: u32) -> Option<FaultClass> {
    None
}

/// Conventional name of a signal, e.g. `SIGSEGV`.
pub fn signal_name(signal: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        let name = match signal {
            libc::SIGSEGV => "SIGSEGV",
            libc::SIGBUS => "SIGBUS",
            libc::SIGILL => "SIGILL",
            libc::SIGABRT => "SIGABRT",
            libc::SIGFPE => "SIGFPE",
            libc::SIGTRAP => "SIGTRAP",
            libc::SIGKILL => "SIGKILL",
            libc::SIGTERM => "SIGTERM",
            _ => return None,
        };
        Some(name)
    }
    #[cfg(not(unix))]
    {
        let _ = signal;
        None
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Termination::Exited(code) => write!(f, "exited with code {code}"),
            Termination::Signaled {
                signal,
                core_dumped,
            } => {
                match signal_name(signal) {
                    Some(name) => write!(f, "killed by {name} ({signal})")?,
                    None => write!(f, "killed by signal {signal}")?,
                }
                if core_dumped {
                    write!(f, ", core dumped")?;
                }
                Ok(())
            }
            Termination::Exception(code) => write!(f, "unhandled exception 0x{code:08X}"),
            Termination::Unknown => write!(f, "ended without a status"),
        }
    }
}
