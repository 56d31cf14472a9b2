//! HTTP server configuration.

use serde::Deserialize;

/// EC2 instance metadata endpoint for the private IPv4 address.
pub const DEFAULT_INSTANCE_METADATA_URL: &str = "http://169.254.169.254/latest/meta-data/local-ipv4";

/// Listener and page settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address. Defaults to "0.0.0.0".
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port. Defaults to 5000; `PORT` overrides.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Look up the host's private address at startup and show it on the page.
    #[serde(default)]
    pub instance_metadata: bool,

    /// Where to look the address up.
    #[serde(default = "default_instance_metadata_url")]
    pub instance_metadata_url: String,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            instance_metadata: false,
            instance_metadata_url: default_instance_metadata_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

const fn default_port() -> u16 {
    5000
}

fn default_instance_metadata_url() -> String {
    DEFAULT_INSTANCE_METADATA_URL.into()
}
