use clap::Parser;
use logfix_cli::args::Args;
use logfix_cli::presentation;
use logfix_engine::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    Args::parse();

    let config = Config::default();
    match logfix_engine::run(&config, presentation::print_outcome) {
        Ok(result) => {
            presentation::print_summary(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
