//! Defaults taken from the environment (and `.env`).
//!
//! Command line flags override everything here. A malformed value is logged
//! and the built-in default is kept.

use crate::models::check_prefix;
use crate::output::OutputFormat;
use crate::processing::extra_bits;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_PREFIX: &str = "IPCALC_PREFIX";
pub const ENV_SUBNETS: &str = "IPCALC_SUBNETS";
pub const ENV_FORMAT: &str = "IPCALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "IPCALC_LOG_CONFIG";

/// Initial values of the calculator form.
pub const DEFAULT_PREFIX: u8 = 24;
pub const DEFAULT_SUBNETS: u32 = 1;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefix: u8,
    pub subnets: u32,
    pub format: OutputFormat,
    /// log4rs YAML file.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: DEFAULT_PREFIX,
            subnets: DEFAULT_SUBNETS,
            format: OutputFormat::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read the process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, starting from [`Config::default`].
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(prefix) = parse_var::<u32>(&lookup, ENV_PREFIX) {
            match check_prefix(prefix) {
                Ok(prefix) => config.prefix = prefix,
                Err(e) => log::warn!("Ignoring {ENV_PREFIX}: {e}"),
            }
        }
        if let Some(subnets) = parse_var::<u32>(&lookup, ENV_SUBNETS) {
            match extra_bits(subnets) {
                Ok(_) => config.subnets = subnets,
                Err(e) => log::warn!("Ignoring {ENV_SUBNETS}: {e}"),
            }
        }
        if let Some(format) = parse_var::<OutputFormat>(&lookup, ENV_FORMAT) {
            config.format = format;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }

        log::debug!("Config: {config:?}");
        config
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring {key}={raw:?}: {e}");
            None
        }
    }
}
