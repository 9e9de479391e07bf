use http::HeaderValue;
use std::net::IpAddr;

use super::schema::Config;

/// Validate server configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref bind) = config.bind {
        if bind.parse::<IpAddr>().is_err() {
            errors.push(format!("bind: invalid IP address '{}'", bind));
        }
    }

    if let Some(ref origin) = config.allowed_origin {
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            errors.push(format!(
                "allowed_origin: '{}' must start with http:// or https://",
                origin
            ));
        } else if origin.ends_with('/') {
            errors.push(format!(
                "allowed_origin: '{}' must not end with '/'",
                origin
            ));
        } else if HeaderValue::from_str(origin).is_err() {
            errors.push(format!("allowed_origin: '{}' is not a valid header value", origin));
        }
    }

    if let Some(ref timeout) = config.request_timeout {
        match humantime::parse_duration(timeout) {
            Ok(d) if d.is_zero() => {
                errors.push("request_timeout: must be greater than zero".to_string());
            }
            Ok(_) => {}
            Err(e) => {
                errors.push(format!("request_timeout: invalid format '{}' - {}", timeout, e));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config {
            port: Some(8080),
            bind: Some("127.0.0.1".to_string()),
            allowed_origin: Some("https://example.com".to_string()),
            request_timeout: Some("10s".to_string()),
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_bind() {
        let config = Config {
            bind: Some("localhost:80".to_string()),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("bind"));
    }

    #[test]
    fn test_origin_without_scheme() {
        let config = Config {
            allowed_origin: Some("example.com".to_string()),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("allowed_origin"));
    }

    #[test]
    fn test_origin_with_trailing_slash() {
        let config = Config {
            allowed_origin: Some("https://example.com/".to_string()),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("must not end with"));
    }

    #[test]
    fn test_zero_timeout() {
        let config = Config {
            request_timeout: Some("0s".to_string()),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("request_timeout"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            port: None,
            bind: Some("nope".to_string()),            // Error 1
            allowed_origin: Some("ftp://x".to_string()), // Error 2
            request_timeout: Some("soon".to_string()),   // Error 3
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
