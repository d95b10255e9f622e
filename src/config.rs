use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Simulated latency of a form submission.
    pub submit_delay: Duration,
    /// Simulated latency before the chat widget answers.
    pub chat_delay: Duration,
    pub chat_history_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            submit_delay: Duration::from_millis(2000),
            chat_delay: Duration::from_millis(1000),
            chat_history_cap: 50,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            addr: parse_var(&lookup, "SITE_ADDR")?.unwrap_or(defaults.addr),
            content_dir: lookup("SITE_CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            static_dir: lookup("SITE_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            submit_delay: parse_var(&lookup, "SITE_SUBMIT_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
            chat_delay: parse_var(&lookup, "SITE_CHAT_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.chat_delay),
            chat_history_cap: parse_var(&lookup, "SITE_CHAT_HISTORY_CAP")?
                .unwrap_or(defaults.chat_history_cap),
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}
