use crate::compiler::settings::{Setting, Settings};
use crate::compiler::source::FileSource;
use crate::compiler::Compiler;
use anyhow::Context;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[clap(about = "Print the tokens of the file specified by <input>")]
pub struct Opts {
    pub input: String,

    /// Line number of the first line of the input
    #[clap(long, default_value = "1")]
    pub initial_line: usize,

    /// Leave comments out of the output
    #[clap(long)]
    pub no_comments: bool,

    /// Also print every symbol that was seen
    #[clap(long)]
    pub symbols: bool,
}

impl Opts {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.set_initial_line(self.initial_line);
        if self.no_comments {
            settings.disable(Setting::Comments);
        }
        settings
    }
}

pub fn execute(opts: &Opts) -> anyhow::Result<i32> {
    let source = FileSource::open(&opts.input)
        .with_context(|| format!("failed to open {}", opts.input))?;
    let mut compiler = Compiler::with_settings(opts.settings());

    let tokens = match compiler.tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => {
            compiler.print_error(&e);
            return Ok(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for token in tokens {
        writeln!(out, "{}", token)?;
    }

    if opts.symbols {
        writeln!(out)?;
        for name in compiler.symbols().names() {
            writeln!(out, "{}", name)?;
        }
    }

    Ok(0)
}
