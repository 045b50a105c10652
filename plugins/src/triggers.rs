//! Exported C entry points.
//!
//! None of the `Cause…Crash` functions write anything before they fault. Pointers
//! and operands go through [`hint::black_box`] so the optimizer cannot prove the
//! fault and drop or rewrite the offending instruction.

#![allow(non_snake_case)]

use std::hint;
use std::io::{self, Write};
use std::process;
use std::ptr;

use crate::object::{self, NativeObject};

/// Lowest page of the address space, never mapped on the platforms we target.
const UNMAPPED_ADDRESS: usize = 0x40;

/// Calls a virtual method through a null object.
#[unsafe(no_mangle)]
pub extern "C" fn CauseNullVirtualCallCrash() {
    let null_object: *const NativeObject = hint::black_box(ptr::null());
    let mut stdout = io::stdout();

    let _ = unsafe { object::dispatch_describe_action(null_object, &mut stdout) };

    process::abort()
}

/// Control entry: runs the same method on a valid object and returns.
#[unsafe(no_mangle)]
pub extern "C" fn NativeDescribeAction() {
    let object = NativeObject::base();
    let mut stdout = io::stdout().lock();

    // No return value over the C ABI; a closed stdout just loses the line.
    let _ = object.describe_action(&mut stdout).and_then(|_| stdout.flush());
}

#[unsafe(no_mangle)]
pub extern "C" fn CauseNullPointerCrash() {
    let target: *mut u32 = hint::black_box(ptr::null_mut());

    unsafe { ptr::write_volatile(target, 0x2A) };

    process::abort()
}

#[unsafe(no_mangle)]
pub extern "C" fn CauseInvalidMemoryAccessCrash() {
    let source = hint::black_box(UNMAPPED_ADDRESS) as *const u32;

    let value = unsafe { ptr::read_volatile(source) };
    hint::black_box(value);

    process::abort()
}

#[unsafe(no_mangle)]
pub extern "C" fn CauseInvalidFunctionPointerCrash() {
    let address = hint::black_box(UNMAPPED_ADDRESS);
    let function: extern "C" fn() = unsafe { std::mem::transmute::<usize, extern "C" fn()>(address) };

    function();

    process::abort()
}

#[unsafe(no_mangle)]
#[allow(unreachable_code)]
pub extern "C" fn CauseIllegalInstructionCrash() {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    unsafe {
        std::arch::asm!("ud2", options(noreturn));
    }

    #[cfg(target_arch = "aarch64")]
    unsafe {
        std::arch::asm!("udf #0", options(noreturn));
    }

    process::abort()
}

#[unsafe(no_mangle)]
pub extern "C" fn CauseAbortCrash() {
    process::abort()
}

#[unsafe(no_mangle)]
pub extern "C" fn CauseStackOverflowCrash() {
    let depth = recurse(hint::black_box(0));
    hint::black_box(depth);

    process::abort()
}

/// Keeps a live buffer in every frame and uses the callee's result, so the
/// call can be neither inlined nor turned into a loop.
#[inline(never)]
#[allow(unconditional_recursion)]
fn recurse(depth: u64) -> u64 {
    let frame = hint::black_box([depth; 128]);
    let deeper = recurse(hint::black_box(depth.wrapping_add(1)));
    deeper.wrapping_add(frame[(depth % 128) as usize])
}

/// A panic cannot leave an `extern "C"` function, so the runtime aborts.
#[unsafe(no_mangle)]
pub extern "C" fn CauseUncaughtExceptionCrash() {
    panic!("[Native]: uncaught panic raised across the C boundary");
}

#[unsafe(no_mangle)]
pub extern "C" fn CauseDivideByZeroCrash() {
    let dividend = hint::black_box(1u32);
    let divisor = hint::black_box(0u32);

    hint::black_box(dividend / divisor);

    process::abort()
}
