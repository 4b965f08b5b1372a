//! Server configuration

use std::net::{Ipv4Addr, SocketAddr};

/// Port the browser extension expects the server on
pub const DEFAULT_PORT: u16 = 8765;

/// Name reported by the health check
pub const DEFAULT_SERVICE_NAME: &str = "paste-server";

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port on the loopback interface
    pub port: u16,

    /// Identity reported by `GET /health`
    pub service_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Address to bind; always loopback
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8765);
        assert_eq!(config.service_name, "paste-server");
    }

    #[test]
    fn test_socket_addr_is_loopback() {
        let addr = ServerConfig::with_port(9000).socket_addr();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9000);
    }
}
