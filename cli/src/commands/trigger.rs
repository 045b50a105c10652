use anyhow::Context;
use crashprobe_common::config::Config;
use crashprobe_common::crash::CrashKind;
use crashprobe_common::{info, warn};
use crashprobe_core::{hardening, launcher};

/// Crashes this process. Returns only if the kind cannot be resolved.
///
/// With `-q` nothing is written before the fault, so a parent capturing the
/// child's output sees only what the crash itself produced.
pub fn trigger(kind: Option<CrashKind>, cfg: &Config) -> anyhow::Result<()> {
    let kind = match kind {
        Some(kind) => kind,
        None => launcher::requested_kind().context("no crash kind given")?,
    };

    if !cfg.allow_coredumps {
        hardening::suppress_core_dumps()?;
    }

    if cfg.quiet == 0 {
        if cfg.allow_coredumps {
            warn!("Core dumps stay enabled for this crash");
        }
        info!("Calling {} ({})", kind.symbol(), kind.description());
    }

    crashprobe_plugins::trigger(kind)
}
