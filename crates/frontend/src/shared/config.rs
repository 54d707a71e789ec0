use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port on the same host as the page
    pub port: u16,
    /// Path prefix for every REST endpoint
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api"

[notifications]
timeout_ms = 4000
"#;

/// Build-time override: TOML text in the `APP_CONFIG` environment variable
const BUILD_CONFIG: Option<&str> = option_env!("APP_CONFIG");

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(text)
}

fn load_config() -> ClientConfig {
    if let Some(text) = BUILD_CONFIG {
        match parse_config(text) {
            Ok(config) => {
                log::info!("Using APP_CONFIG from build environment");
                return config;
            }
            Err(e) => log::warn!("APP_CONFIG is invalid, falling back to defaults: {}", e),
        }
    }

    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid: {}", e);
            ClientConfig::fallback()
        }
    }
}

impl ClientConfig {
    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                prefix: "/api".to_string(),
            },
            notifications: NotificationsConfig { timeout_ms: 4000 },
        }
    }
}

static CONFIG: Lazy<ClientConfig> = Lazy::new(load_config);

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.notifications.timeout_ms, 4000);
        assert_eq!(config, ClientConfig::fallback());
    }

    #[test]
    fn test_override_parses() {
        let config = parse_config(
            r#"
            [api]
            port = 8000
            prefix = "/api/v1"

            [notifications]
            timeout_ms = 2500
            "#,
        )
        .unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.prefix, "/api/v1");
        assert_eq!(config.notifications.timeout_ms, 2500);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[api]\nport = 1\nprefix = \"/x\"\n").is_err());
    }
}
