pub mod lex;
pub mod parse;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "blackbeard",
    version = "0.1",
    about = "Tokenize and parse R source files"
)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Lex(lex::Opts),
    Parse(parse::Opts),
}

/// Runs the selected command and returns the process exit code.
///
/// Errors in the input are reported as diagnostics and yield exit code 1.
/// Only failures of the tool itself (such as a closed stdout) end up in the
/// returned error.
pub fn execute(opts: &Opts) -> anyhow::Result<i32> {
    match &opts.command {
        Command::Lex(opts) => lex::execute(opts),
        Command::Parse(opts) => parse::execute(opts),
    }
}
