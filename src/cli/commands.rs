//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;

use crate::classify::{classify, Class};
use crate::encoder::encode;

use super::args::Commands;

/// Codes of two names and whether they agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub first: String,
    pub second: String,
    pub matches: bool,
}

/// Execute a CLI command.
///
/// Returns `Ok(false)` only for a quiet comparison whose codes differ.
pub fn execute(command: Commands) -> Result<bool> {
    match command {
        Commands::Encode { name } => {
            println!("{}", cmd_encode(&name)?.green());
            Ok(true)
        }
        Commands::Compare {
            first,
            second,
            quiet,
        } => {
            let cmp = cmd_compare(&first, &second)?;
            if quiet {
                return Ok(cmp.matches);
            }
            println!("  {}  {}", cmp.first.green(), first);
            println!("  {}  {}", cmp.second.green(), second);
            if cmp.matches {
                println!("{}", "Match".bold());
            } else {
                println!("{}", "No match".yellow());
            }
            Ok(true)
        }
        Commands::Classify { character } => {
            println!("{}: {}", character, cmd_classify(character)?.cyan());
            Ok(true)
        }
    }
}

/// Encode a single name.
pub fn cmd_encode(name: &str) -> Result<String> {
    encode(name).with_context(|| format!("Failed to encode {:?}", name))
}

/// Encode two names and compare their codes.
pub fn cmd_compare(first: &str, second: &str) -> Result<Comparison> {
    let first = cmd_encode(first)?;
    let second = cmd_encode(second)?;
    let matches = first == second;
    Ok(Comparison {
        first,
        second,
        matches,
    })
}

/// Describe the class of one character.
pub fn cmd_classify(c: char) -> Result<String> {
    let description = match classify(c)? {
        Class::Coded(digit) => digit.to_string(),
        Class::Separator => "separator (dropped)".to_string(),
        Class::Transparent => "transparent (dropped)".to_string(),
    };
    Ok(description)
}
