use std::net::{Ipv4Addr, SocketAddr};

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

pub const DEFAULT_PORT: u16 = 8050;

/// Process-boundary settings, resolved once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Always on in this deployment; selects the default log filter.
    pub debug: bool,
}

impl ServerConfig {
    /// Reads `PORT` from the environment, falling back to the default when
    /// the variable is absent or unparseable.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { port, debug: true }
    }

    /// All interfaces; the service has no interface-selection surface.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
