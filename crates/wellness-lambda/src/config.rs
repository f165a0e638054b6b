use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use tracing::info;

/// Where assessments are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    S3,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StoreBackend::S3),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(eyre::eyre!("unknown store backend: {other}")),
        }
    }
}

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub bucket: String,
    /// Serve locally on this address instead of running as a Lambda function.
    pub bind: Option<SocketAddr>,
    pub secure_cookies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreBackend::S3,
            bucket: "wellness".to_string(),
            bind: None,
            secure_cookies: true,
        }
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let defaults = Config::default();

        Ok(Self {
            store: try_load("WELLNESS_STORE", defaults.store)?,
            bucket: try_load("WELLNESS_BUCKET", defaults.bucket)?,
            bind: match env::var("WELLNESS_BIND") {
                Ok(addr) if !addr.trim().is_empty() => Some(parse("WELLNESS_BIND", &addr)?),
                _ => None,
            },
            secure_cookies: try_load("WELLNESS_SECURE_COOKIES", defaults.secure_cookies)?,
        })
    }
}

fn try_load<T: FromStr + std::fmt::Debug>(key: &str, default: T) -> eyre::Result<T>
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => parse(key, &value),
        Err(_) => {
            info!("{key} not set, using default: {default:?}");
            Ok(default)
        }
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> eyre::Result<T>
where
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| eyre::eyre!("invalid {key} value {value:?}: {e}"))
}
