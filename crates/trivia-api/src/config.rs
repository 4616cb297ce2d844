//! Server configuration read from environment variables.

use crate::error::AppError;

/// Runtime settings of the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PostgreSQL connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`PORT`, default `3000`).
    pub port: u16,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`, default `10`).
    pub database_max_connections: u32,
    /// Name of the session cookie (`SESSION_COOKIE_NAME`).
    pub session_cookie_name: String,
    /// Whether the session cookie is marked `Secure` (`SESSION_COOKIE_SECURE`).
    pub session_cookie_secure: bool,
    /// OTLP collector endpoint (`OTEL_EXPORTER_OTLP_ENDPOINT`); tracing
    /// export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DATABASE_URL` is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::Config("DATABASE_URL environment variable must be set".to_owned())
        })?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = parse_or(&lookup, "PORT", 3000_u16)?;
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10_u32)?;
        let session_cookie_name =
            lookup("SESSION_COOKIE_NAME").unwrap_or_else(|| "trivia_session".to_owned());
        let session_cookie_secure = parse_or(&lookup, "SESSION_COOKIE_SECURE", false)?;
        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url,
            host,
            port,
            database_max_connections,
            session_cookie_name,
            session_cookie_secure,
            otlp_endpoint,
        })
    }

    /// The `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid: {e}"))),
    }
}
