use crate::commands::cue::{CheckCommand, ShowCommand};
use clap::{Parser, Subcommand};

pub mod cue;

/// CLI for inspecting CUE sheets and their track start offsets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Show(ShowCommand),
    Check(CheckCommand),
}
