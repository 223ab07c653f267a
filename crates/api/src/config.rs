use std::fmt;

use axum::http::HeaderValue;

/// Errors raised while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Base URL and credential for one upstream provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// Server fields have defaults suitable for local development; provider
/// endpoints and keys are required.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub aviationstack: ProviderConfig,
    pub flightapi: ProviderConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default    |
    /// |--------------------------|------------|
    /// | `HOST`                   | `0.0.0.0`  |
    /// | `PORT`                   | `8080`     |
    /// | `CORS_ORIGINS`           | `*`        |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`       |
    /// | `AVIATIONSTACK_BASE_URL` | (required) |
    /// | `AVIATIONSTACK_API_KEY`  | (required) |
    /// | `FLIGHTAPI_BASE_URL`     | (required) |
    /// | `FLIGHTAPI_KEY`          | (required) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", "8080", "a valid u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| o.as_str() != "*" && HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: bad.clone(),
            });
        }

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "a valid u64")?;

        let aviationstack = ProviderConfig {
            base_url: required(&lookup, "AVIATIONSTACK_BASE_URL")?,
            api_key: required(&lookup, "AVIATIONSTACK_API_KEY")?,
        };
        let flightapi = ProviderConfig {
            base_url: required(&lookup, "FLIGHTAPI_BASE_URL")?,
            api_key: required(&lookup, "FLIGHTAPI_KEY")?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            aviationstack,
            flightapi,
        })
    }

    /// Whether `CORS_ORIGINS` allows every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    if let Ok(parsed) = value.trim().parse() {
        return Ok(parsed);
    }
    Err(ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
