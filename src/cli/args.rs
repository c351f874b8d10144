//! CLI argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "soundex")]
#[command(about = "Soundex phonetic codes for approximate name matching")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Soundex code of a name
    Encode {
        /// Name or word to encode
        name: String,
    },

    /// Check whether two names share a Soundex code
    Compare {
        /// First name
        first: String,

        /// Second name
        second: String,

        /// Print nothing; exit with status 1 when the codes differ
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the Soundex class of a single character
    Classify {
        /// Character to look up
        character: char,
    },
}
