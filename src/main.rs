use clap::Parser as ClapParser;
use log::error;
use monkey::cli::{run, Cli, CliError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(CliError::ParseError { rendered, count, file }) => {
            eprint!("{}", rendered);
            error!("{} parse error(s) in {}", count, file);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
