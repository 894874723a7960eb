use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casegen")]
#[command(about = "Generate customer case studies from structured metrics files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample case file and placeholder asset
    Init {
        /// Directory to create the sample files in
        #[arg(long)]
        dir: PathBuf,
    },

    /// Generate a case-study report from a case file
    Generate {
        /// Path to the input case file
        #[arg(long)]
        input: PathBuf,

        /// Directory to write the rendered report to
        #[arg(long)]
        out: PathBuf,
    },
}
