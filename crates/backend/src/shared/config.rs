use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub commerce_api: CommerceApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Подключение к admin API интернет-магазина
#[derive(Debug, Deserialize, Clone)]
pub struct CommerceApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[commerce_api]
base_url = "http://localhost:9000"
api_token = ""
timeout_secs = 30
"#;

/// Environment variable that overrides `commerce_api.api_token`
pub const API_TOKEN_ENV: &str = "COMMERCE_API_TOKEN";

fn config_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `COMMERCE_API_TOKEN` is applied on top of whichever file was used.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match config_path() {
        Some(path) if path.exists() => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            parse_config(&contents)?
        }
        Some(path) => {
            tracing::warn!("config.toml not found at: {}", path.display());
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    if let Ok(token) = std::env::var(API_TOKEN_ENV) {
        apply_token_override(&mut config, token);
    }

    Ok(config)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.commerce_api.base_url = config
        .commerce_api
        .base_url
        .trim_end_matches('/')
        .to_string();
    Ok(config)
}

fn apply_token_override(config: &mut Config, token: String) {
    if !token.trim().is_empty() {
        config.commerce_api.api_token = token.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.commerce_api.base_url, "http://localhost:9000");
        assert_eq!(config.commerce_api.timeout_secs, 30);
    }

    #[test]
    fn test_optional_keys_and_trailing_slash() {
        let config = parse_config(
            r#"
            [server]
            port = 8080

            [commerce_api]
            base_url = "https://shop.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.commerce_api.base_url, "https://shop.example.com");
        assert_eq!(config.commerce_api.api_token, "");
        assert_eq!(config.commerce_api.timeout_secs, 30);
    }

    #[test]
    fn test_blank_token_override_is_ignored() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        apply_token_override(&mut config, "  ".to_string());
        assert_eq!(config.commerce_api.api_token, "");

        apply_token_override(&mut config, "sk_live_1 ".to_string());
        assert_eq!(config.commerce_api.api_token, "sk_live_1");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nport = 1").is_err());
    }
}
