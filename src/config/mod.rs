mod schema;
mod validation;

pub use schema::{
    Config, DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT,
};
pub use validation::validate_config;

use anyhow::{Context, Result};
use http::HeaderValue;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Get the config directory path (~/.config/risk-calc/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("risk-calc"))
}

/// Get the default config file path (~/.config/risk-calc/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Apply the `PORT` environment variable on top of the file config.
pub fn apply_port_env(config: &mut Config, port_var: Option<String>) -> Result<()> {
    if let Some(raw) = port_var {
        let port = raw
            .trim()
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT environment variable '{}'", raw))?;
        config.port = Some(port);
    }
    Ok(())
}

/// Fully resolved settings handed to the server startup routine.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub allowed_origin: HeaderValue,
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Resolve a (validated) file config, filling in defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        let bind: IpAddr = config
            .bind
            .as_deref()
            .unwrap_or(DEFAULT_BIND)
            .parse()
            .context("Invalid bind address")?;
        let port = config.port.unwrap_or(DEFAULT_PORT);

        let allowed_origin =
            HeaderValue::from_str(config.allowed_origin.as_deref().unwrap_or(DEFAULT_ALLOWED_ORIGIN))
                .context("Invalid allowed origin")?;

        let request_timeout = humantime::parse_duration(
            config.request_timeout.as_deref().unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        )
        .context("Invalid request timeout")?;

        Ok(Self {
            addr: SocketAddr::new(bind, port),
            allowed_origin,
            request_timeout,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::from([0, 0, 0, 0]), DEFAULT_PORT),
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let resolved = ServerConfig::from_config(&Config::default()).unwrap();
        assert_eq!(resolved.addr.port(), 8080);
        assert_eq!(resolved.addr.ip().to_string(), "0.0.0.0");
        assert_eq!(resolved.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(resolved.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_file_values_resolve() {
        let config = Config {
            port: Some(3000),
            bind: Some("127.0.0.1".to_string()),
            allowed_origin: Some("http://localhost:5173".to_string()),
            request_timeout: Some("2m".to_string()),
        };
        let resolved = ServerConfig::from_config(&config).unwrap();
        assert_eq!(resolved.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(resolved.allowed_origin, "http://localhost:5173");
        assert_eq!(resolved.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_port_env_overrides_file() {
        let mut config = Config {
            port: Some(3000),
            ..Config::default()
        };
        apply_port_env(&mut config, Some("9000".to_string())).unwrap();
        assert_eq!(config.port, Some(9000));
    }

    #[test]
    fn test_port_env_absent_keeps_file() {
        let mut config = Config {
            port: Some(3000),
            ..Config::default()
        };
        apply_port_env(&mut config, None).unwrap();
        assert_eq!(config.port, Some(3000));
    }

    #[test]
    fn test_port_env_invalid() {
        let mut config = Config::default();
        let err = apply_port_env(&mut config, Some("eighty".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let result = load_config(Some(PathBuf::from("/nonexistent/risk-calc/config.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!("risk-calc-test-{}.yaml", std::process::id()));
        fs::write(&path, "port: 4321\nrequest_timeout: \"15s\"\n").unwrap();
        let config = load_config(Some(path.clone())).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.port, Some(4321));
        assert_eq!(config.request_timeout.as_deref(), Some("15s"));
    }
}
