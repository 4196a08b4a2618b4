//! The command line: a single positional argument -- the number of items -- plus the seed source.

use crate::errors::UsageError;
use std::time::{SystemTime, UNIX_EPOCH};


/// Parses the number of items from the command line arguments (`args[0]` being the program name)
pub fn get_sz(args: &[String]) -> Result<usize, UsageError> {
    let arg = args.get(1)
        .ok_or(UsageError::Missing)?;
    let sz = arg.trim().parse::<usize>()
        .map_err(|_| UsageError::NotANumber(arg.clone()))?;
    if sz == 0 {
        return Err(UsageError::Zero);
    }
    Ok(sz)
}

/// The message shown instead of running anything
pub fn usage(program_name: &str) -> String {
    format!("Usage: {} <number of items>\n", program_name)
}

/// The seed for the random data: `env_value` (see [crate::configs::SEED_ENV_VAR]), if it is a number,
/// or the current wall-clock time otherwise
pub fn resolve_seed(env_value: Option<&str>) -> u64 {
    env_value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or_else(clock_seed)
}

fn clock_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH)
        .map(|since_epoch| since_epoch.as_nanos() as u64)
        .unwrap_or_default()
}
