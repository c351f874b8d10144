//! soundex - Soundex phonetic codes from the command line
//!
//! Encodes single names, compares pairs and looks up character classes.

use clap::Parser;
use colored::Colorize;
use std::process;

use soundex::cli::commands;
use soundex::cli::{init_tracing, Cli};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match commands::execute(cli.command) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            process::exit(2);
        }
    }
}
