mod command;
mod config;
mod logging;

pub use command::FilterArg;
pub use config::*;

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(about = "Generate Java models and a PlantUML diagram from an XPath schema table")]
#[command(version)]
pub struct Cli {
    /// Configuration file; `schemagen.toml` is used when present
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate Java classes and the diagram
    Gen(command::GenCommand),

    /// Generate only the diagram
    Uml(command::UmlCommand),

    /// Show how a schema table is interpreted
    Debug(command::DebugCommand),

    /// Repair a schema table in place or into a new file
    Fix(command::FixCommand),
}

/// State shared by every command.
#[derive(Debug)]
pub(crate) struct Context {
    pub(crate) config: Config,
    pub(crate) quiet: bool,
}

impl Cli {
    /// Parses arguments from an iterator, as if they came from the command
    /// line.
    pub fn run_from<I, T>(args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args)?.run()
    }

    pub fn run(self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        let cx = Context {
            config: Config::discover(self.config.as_deref())?,
            quiet: self.quiet,
        };

        match self.command {
            Command::Gen(cmd) => cmd.run(&cx),
            Command::Uml(cmd) => cmd.run(&cx),
            Command::Debug(cmd) => cmd.run(&cx),
            Command::Fix(cmd) => cmd.run(&cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["schemagen", "debug", "schema.csv", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Debug(_)));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["schemagen", "-q", "-v", "debug", "schema.csv"]).is_err());
    }
}
