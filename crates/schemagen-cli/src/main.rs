use anyhow::Result;
use clap::Parser;
use schemagen_cli::Cli;

fn main() -> Result<()> {
    Cli::parse().run()
}
