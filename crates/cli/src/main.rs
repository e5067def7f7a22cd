use clap::Parser;
use colstat_cli::args::Args;
use colstat_cli::config::Config;
use colstat_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = Config::from(args);
    tracing::debug!(?config, "starting run");

    match colstat_cli::execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
