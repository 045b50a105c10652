//! A polymorphic object laid out the way C++ lays one out: the first word of
//! every instance points at a table of method addresses. Calling a method
//! loads that word first, so a call through a null object faults on the load.

use std::io::{self, Write};

pub use crashprobe_common::crash::DIAGNOSTIC_LINE;

pub trait Action {
    fn describe_action(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{DIAGNOSTIC_LINE}")
    }
}

/// The base implementation: keeps the default behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base;

impl Action for Base {}

#[repr(C)]
pub struct ActionVTable {
    pub describe_action: fn(&NativeObject, &mut dyn Write) -> io::Result<()>,
}

static BASE_VTABLE: ActionVTable = ActionVTable {
    describe_action: base_describe_action,
};

fn base_describe_action(_: &NativeObject, out: &mut dyn Write) -> io::Result<()> {
    Base.describe_action(out)
}

#[repr(C)]
pub struct NativeObject {
    vtable: &'static ActionVTable,
}

impl NativeObject {
    pub fn base() -> Self {
        Self {
            vtable: &BASE_VTABLE,
        }
    }

    pub fn describe_action(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.vtable.describe_action)(self, out)
    }
}

/// Calls `describe_action` through the table stored in `object`.
///
/// # Safety
///
/// `object` must point to a live [`NativeObject`]. A null pointer faults while
/// loading the table, before any output is written.
pub unsafe fn dispatch_describe_action(
    object: *const NativeObject,
    out: &mut dyn Write,
) -> io::Result<()> {
    let vtable: &'static ActionVTable = unsafe { (*object).vtable };
    (vtable.describe_action)(unsafe { &*object }, out)
}
