pub mod describe;
pub mod list;
pub mod probe;
pub mod trigger;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use crashprobe_common::config::{Config, DEFAULT_TIMEOUT};
use crashprobe_common::crash::CrashKind;

#[derive(Parser)]
#[command(name = "crashprobe")]
#[command(about = "Crash a process on purpose and check how it died.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less (repeat for even less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Seconds a probe child may run before it is killed
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true)]
    pub timeout: u64,

    /// Keep core dumps enabled in crashing processes
    #[arg(long, global = true)]
    pub allow_coredumps: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every crash the plugin can raise
    #[command(alias = "l")]
    List,
    /// Crash this process (kind defaults to $CRASHPROBE_TRIGGER)
    #[command(alias = "t")]
    Trigger { kind: Option<CrashKind> },
    /// Call the virtual method on a valid object and return
    #[command(alias = "d")]
    Describe,
    /// Crash child processes and check how each one died
    #[command(alias = "p")]
    Probe { kinds: Vec<CrashKind> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            timeout: Duration::from_secs(self.timeout),
            allow_coredumps: self.allow_coredumps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_accepts_names_and_symbols() {
        let cli = CommandLine::try_parse_from(["crashprobe", "trigger", "null-virtual-call"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Trigger {
                kind: Some(CrashKind::NullVirtualCall)
            }
        ));

        let cli = CommandLine::try_parse_from(["crashprobe", "t", "CauseAbortCrash"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Trigger {
                kind: Some(CrashKind::Abort)
            }
        ));
    }

    #[test]
    fn trigger_kind_is_optional() {
        let cli = CommandLine::try_parse_from(["crashprobe", "trigger"]).unwrap();
        assert!(matches!(cli.command, Commands::Trigger { kind: None }));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(CommandLine::try_parse_from(["crashprobe", "trigger", "double-free"]).is_err());
    }

    #[test]
    fn probe_collects_kinds_and_global_flags() {
        let cli = CommandLine::try_parse_from([
            "crashprobe",
            "probe",
            "abort",
            "null-pointer",
            "-qq",
            "--timeout",
            "3",
            "--allow-coredumps",
        ])
        .unwrap();

        let cfg = cli.config();
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.timeout, Duration::from_secs(3));
        assert!(cfg.allow_coredumps);
        assert!(!cfg.no_banner);

        match cli.command {
            Commands::Probe { kinds } => {
                assert_eq!(kinds, vec![CrashKind::Abort, CrashKind::NullPointer])
            }
            _ => panic!("expected the probe command"),
        }
    }

    #[test]
    fn defaults() {
        let cli = CommandLine::try_parse_from(["crashprobe", "list"]).unwrap();
        let cfg = cli.config();

        assert_eq!(cfg.quiet, 0);
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
        assert!(!cfg.allow_coredumps);
    }
}
