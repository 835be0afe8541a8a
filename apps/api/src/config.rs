//! Application configuration loading from environment variables.
//!
//! All configuration is read from the environment at startup. A `.env` file in the
//! working directory is loaded first when present (see `main`).
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging filter (default: "info,city_registry=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `CORS_PERMISSIVE`: Allow requests from any origin (default: true)
//! - `MAX_BODY_BYTES`: Largest accepted JSON request body (default: 1 MiB)

/// Server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Allow any origin; when false no cross-origin requests are allowed
    pub cors_permissive: bool,

    /// Request body limit in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            cors_permissive: env_or("CORS_PERMISSIVE", true)?,
            max_body_bytes: env_or("MAX_BODY_BYTES", 1024 * 1024)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_permissive: true,
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => parse_value(key, &val),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, val: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    val.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e))
}
