use std::io;
use std::process::ExitCode;
use clap::Parser;
use log::error;
use parallel_dijkstra::config::{Cli, Config};
use parallel_dijkstra::runner;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::try_from(Cli::parse()) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match runner::run(&config, &mut out) {
        Ok(result) if result.failures.is_empty() => ExitCode::SUCCESS,
        Ok(result) => {
            error!("{} of {} sources failed", result.failures.len(), result.keys.len());
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
