//! # Shared Types
//!
//! Types used by every crate in the workspace:
//!
//! * **[`crash`]**: The catalog of native crash triggers and the faults they raise.
//! * **[`config`]**: Runtime configuration assembled by the CLI.
//! * **[`log`]**: Thin wrappers around `tracing` used for user-facing status lines.

pub mod config;
pub mod crash;
pub mod log;

#[doc(hidden)]
pub use tracing;

/// Environment variable through which a parent process names the trigger a child must run.
pub const TRIGGER_ENV: &str = "CRASHPROBE_TRIGGER";

/// Environment variable that keeps core dumps enabled in probe children.
pub const ALLOW_COREDUMPS_ENV: &str = "CRASHPROBE_ALLOW_COREDUMPS";
