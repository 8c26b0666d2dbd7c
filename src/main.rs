mod argsets;

use std::process::ExitCode;

use anyhow::Result;
use env_logger::Env;

use sensor_loader::command;
use sensor_loader::config::LoaderConfig;
use sensor_loader::constants::{defaults, envvars};
use sensor_loader::helpers::load_dotenv;

const USAGE: &str = "\
Load sensor readings from a CSV file into MongoDB.

USAGE:
    sensor-loader [OPTIONS]

OPTIONS:
    --csv <PATH>          Input file [default: sensor_data.csv]
    --batch-size <N>      Documents per insert [default: 1000]
    --dry-run             Parse and batch the input without a database
    -h, --help            Print this help

ENVIRONMENT:
    HOST, PORT, USER, PASSWORD, DB_NAME, CONNECT_TIMEOUT_MS, LOG_LEVEL
";

fn main() -> ExitCode {
    let dotenv = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    match dotenv {
        Ok(Some(path)) => log::info!("Loaded {}", path.display()),
        Ok(None) => {}
        Err(e) => log::warn!("Could not load .env: {e}"),
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Data loading process failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let config = argsets::LoadArgs::parse(args)?.apply(LoaderConfig::from_env()?)?;
    log::debug!("Running with {:?}", config);

    command::load(&config)?;
    Ok(())
}
