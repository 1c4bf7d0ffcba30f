// Command-line interface - serve, render and init subcommands
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slice-dashboard")]
#[command(author, version, about = "5G network slicing optimization dashboard")]
pub struct Cli {
    /// Configuration file, without extension
    #[arg(long, global = true, default_value = "config/dashboard")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve,
    /// Render the dashboard and its resources into a directory
    Render {
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the sample summary and simulation results
    Init {
        /// Target directory (defaults to the configured data directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        match &self.command {
            Some(Command::Render { out }) => Command::Render { out: out.clone() },
            Some(Command::Init { dir }) => Command::Init { dir: dir.clone() },
            Some(Command::Serve) | None => Command::Serve,
        }
    }
}
