//! Service configuration read from the environment.

use anyhow::{bail, Context};
use prepmate_core::IntervalSet;

/// Runtime settings for the backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub intervals: IntervalSet,
    pub daily_reset_hour: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            intervals: IntervalSet::default(),
            daily_reset_hour: 0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognised variables:
    /// - HOST, PORT: listen address
    /// - REVISION_INTERVALS: comma-separated review offsets in days
    /// - DAILY_RESET_HOUR: hour (0-23) at which a new study day begins
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?,
            None => defaults.port,
        };

        let intervals = match lookup("REVISION_INTERVALS") {
            Some(raw) => IntervalSet::parse(&raw).context("REVISION_INTERVALS is invalid")?,
            None => defaults.intervals,
        };

        let daily_reset_hour = match lookup("DAILY_RESET_HOUR") {
            Some(hour) => hour
                .parse()
                .with_context(|| format!("DAILY_RESET_HOUR must be an hour, got {hour:?}"))?,
            None => defaults.daily_reset_hour,
        };
        if daily_reset_hour > 23 {
            bail!("DAILY_RESET_HOUR must be between 0 and 23, got {daily_reset_hour}");
        }

        Ok(Self {
            host,
            port,
            intervals,
            daily_reset_hour,
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
