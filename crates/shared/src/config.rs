use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub cors_allow_origin: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// テストやローカル実行用のインメモリSQLite設定
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub default_filter: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を構築
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            environment: get("ENVIRONMENT", "dev"),
            server: ServerConfig {
                bind_address: get("BIND_ADDRESS", "0.0.0.0:8080"),
                cors_allow_origin: get("CORS_ALLOW_ORIGIN", "*"),
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL", "sqlite://todos.db"),
                max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", "5")?,
                acquire_timeout: Duration::from_secs(parse(
                    &lookup,
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    "30",
                )?),
            },
            logging: LoggingConfig {
                format: parse(&lookup, "LOG_FORMAT", "json")?,
                default_filter: "info".to_string(),
            },
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.environment, "dev");
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.server.cors_allow_origin, "*");
        assert_eq!(config.database.url, "sqlite://todos.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(30));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "prod"),
            ("DATABASE_URL", "sqlite:///var/lib/todo/todo.db"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("LOG_FORMAT", "Pretty"),
        ]))
        .unwrap();

        assert_eq!(config.environment, "prod");
        assert_eq!(config.database.url, "sqlite:///var/lib/todo/todo.db");
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS".to_string(),
                value: "many".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")]));

        assert!(matches!(result, Err(ConfigError::Invalid { key, .. }) if key == "LOG_FORMAT"));
    }
}
