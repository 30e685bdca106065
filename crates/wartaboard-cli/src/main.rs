use std::process::ExitCode;

use clap::Parser;
use wartaboard_cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
