use std::time::Duration;

use crate::error::Result;
pub use clap::Parser;
use mgmt_types::config::ServicesConfig;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Management service, performs administrative operations like password reset")]
pub struct ServerConfig {
    #[arg(
        short,
        long,
        default_value_t = 9008,
        env = "MGMT_PORT",
        help = "Port to listen on"
    )]
    pub port: u16,
    #[arg(
        short,
        long,
        default_value = "0.0.0.0",
        env = "MGMT_LISTEN_ADDRESS",
        help = "Address to listen on"
    )]
    pub listen_address: String,

    #[command(flatten)]
    pub services: ServicesConfig,

    #[arg(
        long,
        env = "MGMT_TIMEOUT",
        default_value = "5s",
        help = "Time limit for one operation, including all calls to other services, in human friendly format (e.g. 5s, 1m)",
        value_parser = humantime::parse_duration
    )]
    pub timeout: Duration,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        ServerConfig::try_parse().map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let config = ServerConfig::try_parse_from([
            "mgmt-server",
            "--port",
            "9100",
            "--timeout",
            "1m 30s",
            "--auth-url",
            "http://auth:9004",
        ])
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.timeout, Duration::from_secs(90));
        assert_eq!(config.services.auth_url.host_str(), Some("auth"));
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(ServerConfig::try_parse_from(["mgmt-server", "--timeout", "soon"]).is_err());
    }
}
