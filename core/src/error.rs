use std::io;
use std::time::Duration;

use crashprobe_common::crash::{CrashKind, CrashKindError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to start the child for '{kind}'")]
    Spawn {
        kind: CrashKind,
        #[source]
        source: io::Error,
    },

    #[error("failed to collect the child for '{kind}'")]
    Wait {
        kind: CrashKind,
        #[source]
        source: io::Error,
    },

    #[error("'{kind}' did not terminate within {}s", .timeout.as_secs_f64())]
    Timeout { kind: CrashKind, timeout: Duration },

    #[error("environment variable {0} is not set")]
    MissingTrigger(&'static str),

    #[error(transparent)]
    UnknownKind(#[from] CrashKindError),
}
