use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    /// Hides the banner at startup.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers and banners, 2 prints only the summary.
    pub quiet: u8,
    /// How long a probe child may run before it is killed.
    pub timeout: Duration,
    /// Keeps core dumps enabled in probe children.
    ///
    /// Off by default so a full probe run does not leave a core file per trigger.
    pub allow_coredumps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            timeout: DEFAULT_TIMEOUT,
            allow_coredumps: false,
        }
    }
}
