use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use withal::driver;
use withal::fault::Fault;
use withal::settings::Settings;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(fault) => {
            error!(%fault, file = fault.file(), line = fault.line(), "unhandled fault");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Fault> {
    let settings = Settings::load()?;
    let mut stdout = io::stdout();
    driver::run(&settings, &mut stdout)
}
