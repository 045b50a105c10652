//! Child-side preparation before a trigger fires.

use std::env;
use std::io;

use anyhow::{Context, Result};
use crashprobe_common::ALLOW_COREDUMPS_ENV;

/// Disables core files for the current process unless the override is set.
///
/// Probing the whole catalog crashes one child per trigger; with cores enabled
/// each of them leaves a dump behind.
pub fn suppress_core_dumps() -> Result<()> {
    if coredumps_allowed_by_override() {
        tracing::debug!(
            env_var = ALLOW_COREDUMPS_ENV,
            "Core dumps left enabled by environment override"
        );
        return Ok(());
    }

    apply_platform_limit().context("failed to disable core dumps")?;
    tracing::debug!("Core dumps disabled for this process");
    Ok(())
}

fn coredumps_allowed_by_override() -> bool {
    match env::var(ALLOW_COREDUMPS_ENV) {
        Ok(raw) => is_truthy(raw.as_str()),
        Err(_) => false,
    }
}

pub(crate) fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(unix)]
fn apply_platform_limit() -> io::Result<()> {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    let rc = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &raw const limit) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn apply_platform_limit() -> io::Result<()> {
    Ok(())
}
