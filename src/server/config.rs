//! Environment-based application configuration.

use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;
const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// HMAC secret used to sign and verify bearer tokens.
    pub jwt_secret: String,

    pub port: u16,
    pub upload_dir: PathBuf,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
    /// Whether acting routes verify the bearer token against the acting user.
    pub require_auth: bool,
}

impl Config {
    /// Loads configuration from the process environment after reading `.env` if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values parsed
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            jwt_secret: required(&lookup, "JWT_SECRET")?,
            port: optional(&lookup, "PORT", DEFAULT_PORT)?,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            token_ttl_seconds: optional(&lookup, "TOKEN_TTL_SECONDS", DEFAULT_TOKEN_TTL_SECONDS)?,
            bcrypt_cost: optional(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            require_auth: optional(&lookup, "REQUIRE_AUTH", true)?,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults_for_optional_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.token_ttl_seconds, 3600);
        assert_eq!(config.bcrypt_cost, 10);
        assert!(config.require_auth);
    }

    #[test]
    fn reports_missing_required_variable() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "JWT_SECRET"
        ));
    }

    #[test]
    fn rejects_unparsable_values() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("PORT", "eighty"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn parses_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("PORT", "8080"),
            ("UPLOAD_DIR", "/tmp/photos"),
            ("REQUIRE_AUTH", "false"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/photos"));
        assert!(!config.require_auth);
    }

    #[test]
    fn env_example_is_a_valid_config() {
        let vars: Vec<(&str, &str)> = include_str!("../../.env.example")
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .collect();

        for name in [
            "DATABASE_URL",
            "JWT_SECRET",
            "PORT",
            "UPLOAD_DIR",
            "TOKEN_TTL_SECONDS",
            "BCRYPT_COST",
            "REQUIRE_AUTH",
        ] {
            assert!(vars.iter().any(|(key, _)| *key == name), "missing {}", name);
        }

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.port, 3000);
    }
}
