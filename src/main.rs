//! iconforge CLI - SVG icon asset pipeline
//!
//! Usage: iconforge <COMMAND>
//!
//! Commands:
//!   enum        Generate the TypeScript icon enum
//!   components  Generate React components and their index
//!   copy        Copy optimized assets into the distribution
//!   headers     Maintain license headers in SVG assets
//!   build       enum + components + copy
//!   diff        Compare generated output with the files on disk

use anyhow::Result;
use clap::Parser;

use iconforge::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::Invocation;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let inv = Invocation::from_cli(&cli)?;

    match cli.command {
        Commands::Enum => commands::enums::cmd_enum(&inv),
        Commands::Components { no_mirror } => commands::components::cmd_components(&inv, no_mirror),
        Commands::Copy => commands::copy::cmd_copy(&inv),
        Commands::Headers => commands::headers::cmd_headers(&inv),
        Commands::Build => commands::build::cmd_build(&inv),
        Commands::Diff { check } => commands::diff::cmd_diff(&inv, check),
    }
}
