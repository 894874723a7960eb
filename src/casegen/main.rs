use casegen::commands::{self, CmdMessage, MessageLevel};
use casegen::error::Result;
use clap::Parser;
use colored::*;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir)?,
        Commands::Generate { input, out } => commands::generate::run(&input, &out)?,
    };

    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
