//! Status macros.
//!
//! Each macro forwards to `tracing` under a dedicated target so the CLI formatter
//! can pick a symbol for it. Library code that just wants diagnostics should use
//! `tracing` directly.

pub const SUCCESS_TARGET: &str = "crashprobe::success";
pub const STATUS_TARGET: &str = "crashprobe::status";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}
