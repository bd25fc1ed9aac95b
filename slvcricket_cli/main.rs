use std::{io, process::ExitCode, sync::Arc};

use clap::Parser;

use slvcricket_app::config::Config;
use slvcricket_cli::{cli::Cli, console::ConsoleNotifier, open_store, run};
use slvcricket_types::errors::ApplicationError;

mod logs;
use logs::setup_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Arc::new(Config::from_env());
    let _guard = setup_logging(&config.data_dir.join("logs"));

    let mut store = open_store(config, Box::new(ConsoleNotifier));

    match run(&mut store, cli.command, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Store errors were already shown as notifications.
            if e.downcast_ref::<ApplicationError>().is_none() {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
