use crashprobe_common::config::Config;
use crashprobe_common::crash::CrashKind;

use crate::terminal::{format, print};

pub fn list(cfg: &Config) {
    print::header("crash catalog", cfg.quiet);

    for (idx, kind) in CrashKind::ALL.into_iter().enumerate() {
        if idx > 0 {
            print::blank();
        }
        // -qq keeps only the numbered names
        let details = if cfg.quiet < 2 { format::kind_to_details(kind) } else { Vec::new() };
        print::entry(idx, kind.name(), &details);
    }

    print::rule();
}
