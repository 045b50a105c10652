use std::io::{self, Write};

use anyhow::Context;
use colored::*;
use crashprobe_common::config::Config;
use crashprobe_common::success;
use crashprobe_plugins::object::NativeObject;

use crate::terminal::print;

/// Runs the virtual method on a live object. The control case for `trigger`.
pub fn describe(cfg: &Config) -> anyhow::Result<()> {
    print::header("control call", cfg.quiet);

    print::fields(&[
        ("Object".to_string(), "Base (valid)".normal()),
        ("Dispatch".to_string(), "through the object's table".normal()),
    ]);

    let object = NativeObject::base();
    let mut stdout = io::stdout().lock();
    object
        .describe_action(&mut stdout)
        .and_then(|_| stdout.flush())
        .context("failed to write the diagnostic line")?;

    success!("Virtual call returned normally");
    Ok(())
}
