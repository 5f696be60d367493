use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Context};
use tracing::info;

/// Which record store backs the process. Chosen once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory { seed_sample_data: bool },
    Postgres { database_url: String, max_connections: u32 },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageBackend,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let storage = match lookup("STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("memory") => StorageBackend::Memory {
                seed_sample_data: parse_or(&lookup, "SEED_SAMPLE_DATA", true)?,
            },
            Some("postgres") => StorageBackend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or_else(|| anyhow!("DATABASE_URL must be set when STORAGE=postgres"))?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10u32)?,
            },
            Some(other) => bail!("STORAGE must be `memory` or `postgres`, got `{other}`"),
        };

        Ok(Self {
            port,
            storage,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
