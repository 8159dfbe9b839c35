//! Runtime configuration loaded from the environment

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::crawler::DEFAULT_USER_AGENT;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (`JOB_FINDER_ADDR`)
    pub bind_addr: SocketAddr,
    /// Upper bound on each source's fetch (`JOB_FINDER_FETCH_TIMEOUT_SECS`)
    pub fetch_timeout: Duration,
    /// User agent sent to listing sites (`JOB_FINDER_USER_AGENT`)
    pub user_agent: String,
    /// Source ids to query; empty means all (`JOB_FINDER_SOURCES`)
    pub sources: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr: SocketAddr = lookup("JOB_FINDER_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .context("JOB_FINDER_ADDR must be a socket address such as 0.0.0.0:8080")?;

        let fetch_timeout = match lookup("JOB_FINDER_FETCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid JOB_FINDER_FETCH_TIMEOUT_SECS: {raw}"))?;
                anyhow::ensure!(secs > 0, "JOB_FINDER_FETCH_TIMEOUT_SECS must be positive");
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let user_agent = lookup("JOB_FINDER_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let sources = lookup("JOB_FINDER_SOURCES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            fetch_timeout,
            user_agent,
            sources,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("JOB_FINDER_ADDR", "127.0.0.1:3000"),
            ("JOB_FINDER_FETCH_TIMEOUT_SECS", "4"),
            ("JOB_FINDER_SOURCES", "indeed, stackoverflow,,"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(4));
        assert_eq!(config.sources, vec!["indeed", "stackoverflow"]);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup_from(&[("JOB_FINDER_ADDR", "nowhere")])).is_err());
        assert!(
            Config::from_lookup(lookup_from(&[("JOB_FINDER_FETCH_TIMEOUT_SECS", "0")])).is_err()
        );
        assert!(
            Config::from_lookup(lookup_from(&[("JOB_FINDER_FETCH_TIMEOUT_SECS", "soon")])).is_err()
        );
    }
}
