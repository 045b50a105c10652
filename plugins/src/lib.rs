//! # Native Crash Plugin
//!
//! A shared library that a host loads through FFI to crash itself on request.
//! Every entry point in [`triggers`] is exported unmangled with the C calling
//! convention and never returns control: the fault it raises is the product.
//!
//! The library is meant to exercise a crash reporter. A host calls one of the
//! `Cause…Crash` symbols and then checks that its reporter recorded the fault.
//!
//! * **[`object`]**: A polymorphic type whose calls resolve through a table stored in the object.
//! * **[`triggers`]**: The exported C entry points.

pub mod object;
pub mod triggers;

use crashprobe_common::crash::CrashKind;

/// Raises the crash named by `kind` in the calling process.
pub fn trigger(kind: CrashKind) -> ! {
    let entry: extern "C" fn() = match kind {
        CrashKind::NullVirtualCall => triggers::CauseNullVirtualCallCrash,
        CrashKind::NullPointer => triggers::CauseNullPointerCrash,
        CrashKind::InvalidMemoryAccess => triggers::CauseInvalidMemoryAccessCrash,
        CrashKind::InvalidFunctionPointer => triggers::CauseInvalidFunctionPointerCrash,
        CrashKind::IllegalInstruction => triggers::CauseIllegalInstructionCrash,
        CrashKind::Abort => triggers::CauseAbortCrash,
        CrashKind::StackOverflow => triggers::CauseStackOverflowCrash,
        CrashKind::UncaughtPanic => triggers::CauseUncaughtExceptionCrash,
        CrashKind::DivideByZero => triggers::CauseDivideByZeroCrash,
    };

    entry();

    // Every entry point diverges; reaching this line means the fault was swallowed.
    std::process::abort()
}
