use std::{net::SocketAddr, path::PathBuf};
use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    storage::StorageBackend,
};

const DEFAULT_CORS_ORIGINS: &str = "*";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8000";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin, configured as `*`
    Any,
    List(Vec<String>),
}

pub struct Config {
    pub database_url: String,
    pub storage_backend: StorageBackend,
    pub cors_origins: CorsOrigins,
    pub upload_dir: PathBuf,
    /// Base URL uploaded file links are built on, always ending with `/`
    pub public_url: Url,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup, applying defaults for optional values.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Validated configuration
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A value failed to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
        let invalid = |name: &str, reason: String| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason,
        };

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value
                .parse::<StorageBackend>()
                .map_err(|reason| invalid("STORAGE_BACKEND", reason))?,
            None => StorageBackend::default(),
        };

        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS", DEFAULT_CORS_ORIGINS));

        let mut public_url = var("PUBLIC_URL", DEFAULT_PUBLIC_URL);
        if !public_url.ends_with('/') {
            public_url.push('/');
        }
        let public_url =
            Url::parse(&public_url).map_err(|err| invalid("PUBLIC_URL", err.to_string()))?;

        let bind_address = var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)
            .parse::<SocketAddr>()
            .map_err(|err| invalid("BIND_ADDRESS", err.to_string()))?;

        Ok(Self {
            database_url,
            storage_backend,
            cors_origins,
            upload_dir: PathBuf::from(var("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
            public_url,
            bind_address,
        })
    }
}

/// Splits a comma separated origin list; `*` anywhere in it allows every origin.
fn parse_cors_origins(value: &str) -> CorsOrigins {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}
