use blackbeard::cmd;
use clap::Parser;

fn main() {
    pretty_env_logger::init();
    let opts = cmd::Opts::parse();

    match cmd::execute(&opts) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
