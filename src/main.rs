mod app;
mod config;
mod data;
mod error;
mod state;
mod stats;
mod ui;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use app::InspectorApp;
use clap::Parser;
use config::Settings;
use error::InspectError;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let settings = Settings::parse();
    log::debug!("starting with {settings:?}");

    let stdin = io::stdin();
    let mut app = InspectorApp::new(stdin.lock(), io::stdout().lock(), settings);
    let result = app.run();
    drop(app);

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ InspectError::Console(_)) => Err(e).context("console session failed"),
        // Data-integrity failures end the process without returning to the menu.
        Err(e) => {
            println!("{e}");
            Ok(ExitCode::from(1))
        }
    }
}
