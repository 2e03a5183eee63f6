//! Service configuration: command-line flags with environment fallbacks.

use crate::ingestion::explorer::{DEFAULT_EXPLORER_URL, ZERO_ADDRESS};
use crate::storage::cache::CacheSettings;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "tattoo-discovery", version, about = "Tag discovery API for the tattoo gallery")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "TATTOO_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Seed the store with the built-in gallery fixture.
    #[arg(
        long,
        env = "TATTOO_FIXTURES",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub fixtures: bool,

    /// Block explorer API base URL.
    #[arg(long, env = "TATTOO_EXPLORER_URL", default_value = DEFAULT_EXPLORER_URL)]
    pub explorer_url: String,

    /// Tattoo NFT contract address; the zero address disables explorer sync.
    #[arg(long, env = "TATTOO_CONTRACT", default_value = ZERO_ADDRESS)]
    pub contract: String,

    /// Number of instances pulled from the explorer per sync.
    #[arg(long, env = "TATTOO_FETCH_LIMIT", default_value_t = 200)]
    pub fetch_limit: usize,

    /// Per-request explorer timeout in seconds.
    #[arg(long, env = "TATTOO_EXPLORER_TIMEOUT_SECS", default_value_t = 10)]
    pub explorer_timeout_secs: u64,

    /// Attempts per explorer request before giving up.
    #[arg(long, env = "TATTOO_EXPLORER_ATTEMPTS", default_value_t = 3)]
    pub explorer_attempts: usize,

    /// Seconds between explorer syncs; 0 syncs only at start-up.
    #[arg(long, env = "TATTOO_REFRESH_SECS", default_value_t = 0)]
    pub refresh_secs: u64,

    #[arg(long, env = "TATTOO_SEARCH_TTL_SECS", default_value_t = 300)]
    pub search_ttl_secs: u64,

    #[arg(long, env = "TATTOO_RELATED_TTL_SECS", default_value_t = 600)]
    pub related_ttl_secs: u64,

    #[arg(long, env = "TATTOO_TRENDING_TTL_SECS", default_value_t = 900)]
    pub trending_ttl_secs: u64,

    /// Default log filter, overridden by `RUST_LOG`.
    #[arg(long, env = "TATTOO_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            search_ttl: Duration::from_secs(self.search_ttl_secs),
            related_ttl: Duration::from_secs(self.related_ttl_secs),
            trending_ttl: Duration::from_secs(self.trending_ttl_secs),
        }
    }

    pub fn explorer_timeout(&self) -> Duration {
        Duration::from_secs(self.explorer_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }
}
