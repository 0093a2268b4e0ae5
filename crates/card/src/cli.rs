use crate::handler::Outcome;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::{io, path::PathBuf};

/// Validate, generate, inspect and issue payment card numbers
#[derive(Parser, Debug)]
#[command(name = "creditcard", author, version, about, long_about = None)]
pub struct Args {
    /// Seed the random source for reproducible `generate --pick` and `issue` output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the Luhn checksum of each number
    Validate {
        /// Read numbers from stdin
        #[arg(long)]
        stdin: bool,

        numbers: Vec<String>,
    },

    /// List numbers matching a pattern with up to 4 trailing asterisks
    Generate {
        /// Pick a random valid number
        #[arg(long)]
        pick: bool,

        pattern: String,
    },

    /// Show validity, brand and issuer of each number
    Information(InformationArgs),

    /// Issue a new valid number for a brand and issuer
    Issue(IssueArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Validate { .. } => "validate",
            Command::Generate { .. } => "generate",
            Command::Information(_) => "information",
            Command::Issue(_) => "issue",
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct TableArgs {
    /// File with brands, one `name:prefix` per line
    #[arg(long)]
    pub brands: PathBuf,

    /// File with issuers, one `name:prefix` per line
    #[arg(long)]
    pub issuers: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct InformationArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Read numbers from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Print one JSON object per number
    #[arg(long)]
    pub json: bool,

    pub numbers: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct IssueArgs {
    #[command(flatten)]
    pub tables: TableArgs,

    /// Brand name
    #[arg(long)]
    pub brand: String,

    /// Issuer name
    #[arg(long)]
    pub issuer: String,
}

/// Outcome of a failed parse once clap has tried to print it. `--help` and
/// `--version` succeed only if their text reached the terminal.
pub fn usage_outcome(err: &clap::Error, printed: io::Result<()>) -> Outcome {
    if printed.is_err() || err.use_stderr() {
        Outcome::Failure
    } else {
        Outcome::Success
    }
}
