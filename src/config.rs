use std::net::{IpAddr, SocketAddr};

/// Port the service listens on when neither `PORT` nor `SERVER_PORT` is set.
pub const DEFAULT_PORT: u16 = 8001;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub cors_origin: String,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }

    /// Lowercase name, as accepted by `ENVIRONMENT`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT`, `ENVIRONMENT`, `LOG_LEVEL`, `CORS_ORIGIN`
    ///
    /// `PORT` overrides `SERVER_PORT`, and the host defaults to `0.0.0.0` in production.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, or if `SERVER_HOST` / `SERVER_PORT`
    /// contain invalid values.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let environment = Environment::parse(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        );

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .map_or(Ok(DEFAULT_PORT), |port| port.parse::<u16>())
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            database_url,
            server_host,
            server_port,
            environment,
            log_level,
            cors_origin,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = Config {
            database_url: String::new(),
            server_host: IpAddr::from([127, 0, 0, 1]),
            server_port: DEFAULT_PORT,
            environment: Environment::Development,
            log_level: "info".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
        };
        let addr = config.socket_addr();
        assert_eq!(addr.port(), 8001);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Staging);
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("anything-else"), Environment::Development);
        assert_eq!(Environment::Production.as_str(), "production");
    }
}
