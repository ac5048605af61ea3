//! Process configuration, read once at startup from the environment.
//!
//! | Variable                   | Default                 |
//! |----------------------------|-------------------------|
//! | `HOST`                     | `0.0.0.0`               |
//! | `PORT`                     | `5555`                  |
//! | `DATABASE_URL` or `DB_URI` | `sqlite://app.db`       |
//! | `DATABASE_MAX_CONNECTIONS` | `5`                     |
//! | `CORS_ORIGINS`             | `http://localhost:3000` |
//! | `REQUEST_TIMEOUT_SECS`     | `30`                    |

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Settings shared by the server and seed binaries.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite URL; the file is created on first connect.
    pub database_url: String,
    pub max_connections: u32,
    /// Browser origins allowed to call the API, comma-separated in the env.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Panics on a value that is set but does not parse; a misconfigured
    /// process should not start.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .or_else(|_| env::var("DB_URI"))
            .unwrap_or_else(|_| "sqlite://app.db".into());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parsed_var("PORT", 5555),
            database_url,
            max_connections: parsed_var("DATABASE_MAX_CONNECTIONS", 5),
            cors_origins,
            request_timeout_secs: parsed_var("REQUEST_TIMEOUT_SECS", 30),
        }
    }
}

fn parsed_var<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|err| panic!("{name}={raw:?} is invalid: {err}")),
        Err(_) => default,
    }
}
