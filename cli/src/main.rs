mod commands;
mod terminal;

use commands::{CommandLine, Commands, describe, list, probe, trigger};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging();
    print::banner(&cfg);

    match commands.command {
        Commands::List => {
            list::list(&cfg);
            Ok(())
        }
        Commands::Trigger { kind } => {
            print::header("crashing this process", cfg.quiet);
            trigger::trigger(kind, &cfg)
        }
        Commands::Describe => describe::describe(&cfg),
        Commands::Probe { kinds } => probe::probe(kinds, &cfg).await,
    }
}
