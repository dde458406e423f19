//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

use crate::router::table::UnmatchedPolicy;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid HOST: {0:?}")]
    InvalidBindAddr(String),
    #[error("invalid UNMATCHED_POLICY: {0:?} (expected `login` or `not_found`)")]
    InvalidUnmatchedPolicy(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub unmatched: UnmatchedPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::new(IpAddr::from([0, 0, 0, 0]), DEFAULT_PORT),
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `UNMATCHED_POLICY`: `login` (default) or `not_found`
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(host.clone()))?;

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let unmatched = parse_unmatched_policy(var("UNMATCHED_POLICY").as_deref())?;

        Ok(Self { bind: SocketAddr::new(ip, port), unmatched })
    }
}

fn parse_unmatched_policy(raw: Option<&str>) -> Result<UnmatchedPolicy, ConfigError> {
    let Some(raw) = raw else {
        return Ok(UnmatchedPolicy::default());
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "login" | "redirect" => Ok(UnmatchedPolicy::Login),
        "not_found" | "not-found" | "404" => Ok(UnmatchedPolicy::NotFound),
        _ => Err(ConfigError::InvalidUnmatchedPolicy(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
