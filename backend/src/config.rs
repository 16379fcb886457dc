//! Server configuration and environment variable handling.

use std::env;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Explicit repository.toml location, if any
    pub repository_config: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            repository_config: None,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): Interface to bind
    /// - `PORT` (optional, default: 8080): TCP port
    /// - `REPOSITORY_CONFIG` (optional): Path to a repository.toml file
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let repository_config = env::var("REPOSITORY_CONFIG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            repository_config,
        })
    }

    /// Resolve the bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))?
            .next()
            .ok_or_else(|| format!("No address found for {}:{}", self.host, self.port))
    }
}
