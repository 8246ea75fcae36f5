//! scenegen - bakes scene descriptions into a compiled binary
//!
//! Scene files found under the models directory are read together with the geometry and
//! material files they reference, and everything is emitted as a C++ header and source pair
//! holding one `dataset` record per scene.

use clap::{Parser, Subcommand};
use commands::{build::BuildCommand, inspect::InspectCommand, list::ListCommand};
use scenegen_utils::{ok, AnyResult};

pub mod commands;
pub mod config;
pub mod dataset;
pub mod discovery;
pub mod emit;
pub mod packer;
pub mod scene;

#[cfg(test)]
mod testing;

pub use config::PackerConfig;
pub use packer::{pack, survey, PackSummary};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `build` with the standard project layout
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand)]
pub enum CliCommand {
    /// Packs all scenes into the dataset header and source
    Build(BuildCommand),
    /// Lists discovered scenes and the files they reference, without writing anything
    List(ListCommand),
    /// Reads a generated dataset back and checks it for consistency
    Inspect(InspectCommand),
}

pub trait Command {
    fn run(self) -> AnyResult;
}

/// Runs `scenegen` as if it was ran from the command line.
pub fn run(cli: Cli) -> AnyResult {
    match cli.command {
        Some(CliCommand::Build(c)) => c.run()?,
        Some(CliCommand::List(c)) => c.run()?,
        Some(CliCommand::Inspect(c)) => c.run()?,
        None => BuildCommand::default().run()?,
    }
    ok()
}
