//! # Probe Engine
//!
//! Runs crash triggers in child processes and judges how the children died.
//! It stands in for the crash reporter a real host would use: the parent
//! observes the fault from outside and records it as a [`report::CrashReport`].
//!
//! * **[`launcher`]**: Starting a child that runs one trigger.
//! * **[`termination`]**: Turning an exit status into a fault class.
//! * **[`report`]**: What the parent recorded and whether it matches the catalog.
//! * **[`probe`]**: Running one or many triggers end to end.
//! * **[`hardening`]**: Child-side setup before the crash.

pub mod error;
pub mod hardening;
pub mod launcher;
pub mod probe;
pub mod report;
pub mod termination;

pub use error::ProbeError;
