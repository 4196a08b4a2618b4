//! Times one algorithm of each Big-O class for the number of items given on the command line.

use big_o_classes::{
    cli::{get_sz, resolve_seed, usage},
    configs::SEED_ENV_VAR,
    show_algo_results, Environment, SetupError, OUTPUT,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;


fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let sz = match get_sz(&args) {
        Ok(sz) => sz,
        Err(err) => {
            debug!(%err, "not running any algorithm");
            let program_name = args.first().map(String::as_str).unwrap_or(env!("CARGO_PKG_NAME"));
            print!("{}", usage(program_name));
            return ExitCode::SUCCESS;
        },
    };

    match run(sz) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {}", env!("CARGO_PKG_NAME"), err);
            ExitCode::FAILURE
        },
    }
}

fn run(sz: usize) -> Result<(), SetupError> {
    let seed = resolve_seed(std::env::var(SEED_ENV_VAR).ok().as_deref());
    debug!(seed, "set `{}` to repeat this run with the same data", SEED_ENV_VAR);
    let mut environment = Environment::new(sz, seed)?;
    show_algo_results(environment.entries()?, OUTPUT);
    Ok(())
}
