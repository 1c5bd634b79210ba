use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: IpAddr,
    pub server_port: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST,
            server_port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT`, `LOG_LEVEL`.
    /// `PORT` overrides `SERVER_PORT` when both are set.
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVER_HOST` / `SERVER_PORT` contain invalid values.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the host or port values cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Container platforms provide PORT; fall back to SERVER_PORT, then 8080
        let server_port = match lookup("PORT").or_else(|| lookup("SERVER_PORT")) {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT / PORT must be a valid u16, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let server_host = match lookup("SERVER_HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .with_context(|| format!("SERVER_HOST must be a valid IP address, got {host:?}"))?,
            None => DEFAULT_HOST,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            server_host,
            server_port,
            log_level,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}
