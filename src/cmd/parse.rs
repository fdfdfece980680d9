use crate::compiler::frontend::ast::writer::Writer;
use crate::compiler::settings::{Setting, Settings};
use crate::compiler::source::FileSource;
use crate::compiler::Compiler;
use anyhow::Context;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[clap(about = "Print the syntax tree of the file specified by <input>")]
pub struct Opts {
    pub input: String,

    /// Line number of the first line of the input
    #[clap(long, default_value = "1")]
    pub initial_line: usize,

    /// Spread large nodes over several lines
    #[clap(long)]
    pub pretty: bool,

    /// Read `1L` as a float like any other number
    #[clap(long)]
    pub no_integer_literals: bool,
}

impl Opts {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.set_initial_line(self.initial_line);
        if self.no_integer_literals {
            settings.disable(Setting::IntegerLiterals);
        }
        settings
    }
}

pub fn execute(opts: &Opts) -> anyhow::Result<i32> {
    let source = FileSource::open(&opts.input)
        .with_context(|| format!("failed to open {}", opts.input))?;
    let mut compiler = Compiler::with_settings(opts.settings());

    let ast = match compiler.parse(source) {
        Ok(ast) => ast,
        Err(e) => {
            compiler.print_error(&e);
            return Ok(1);
        }
    };

    let writer = if opts.pretty {
        Writer::pretty()
    } else {
        Writer::new()
    };

    let stdout = std::io::stdout();
    writeln!(stdout.lock(), "{}", writer.write_block(&ast))?;

    Ok(0)
}
