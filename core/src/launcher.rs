//! Starting the child that runs a trigger.
//!
//! The parent never loads the plugin itself: every trigger runs in a fresh
//! process so that the crash it raises is observable from outside. The kind
//! travels through the [`TRIGGER_ENV`] variable, which keeps the child's
//! command line free for whatever harness re-executes it (the CLI binary, or
//! a test binary running a single test).

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use crashprobe_common::TRIGGER_ENV;
use crashprobe_common::config::DEFAULT_TIMEOUT;
use crashprobe_common::crash::CrashKind;
use tokio::process::Command;
use tracing::debug;

use crate::error::ProbeError;

/// Raw outcome of one child.
#[derive(Debug)]
pub struct ChildRun {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub elapsed: Duration,
}

/// Runs one trigger out of process.
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn launch(&self, kind: CrashKind) -> Result<ChildRun, ProbeError>;
}

/// Re-executes a program with fixed arguments, naming the trigger in the environment.
#[derive(Debug, Clone)]
pub struct SelfExecLauncher {
    program: PathBuf,
    args: Vec<OsString>,
    envs: Vec<(OsString, OsString)>,
    timeout: Duration,
}

impl SelfExecLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Launches the binary that is currently running.
    pub fn current_exe() -> std::io::Result<Self> {
        Ok(Self::new(env::current_exe()?))
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self, kind: CrashKind) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .env(TRIGGER_ENV, kind.name())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl Launcher for SelfExecLauncher {
    async fn launch(&self, kind: CrashKind) -> Result<ChildRun, ProbeError> {
        let child = self
            .command(kind)
            .spawn()
            .map_err(|source| ProbeError::Spawn { kind, source })?;

        debug!(%kind, pid = ?child.id(), program = %self.program.display(), "Child started");
        let started = Instant::now();

        // Dropping the output future on timeout drops the child, which kills it.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ProbeError::Timeout {
                kind,
                timeout: self.timeout,
            })?
            .map_err(|source| ProbeError::Wait { kind, source })?;

        Ok(ChildRun {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
            elapsed: started.elapsed(),
        })
    }
}

/// The trigger a parent asked this process to run.
pub fn requested_kind() -> Result<CrashKind, ProbeError> {
    let raw = env::var(TRIGGER_ENV).map_err(|_| ProbeError::MissingTrigger(TRIGGER_ENV))?;
    Ok(raw.parse()?)
}
