//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `POSTLINE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `POSTLINE_SERVER__PORT=8080`
/// - `POSTLINE_SERVER__API_PREFIX=/v1`
/// - `POSTLINE_CORS__HANDLE_PREFLIGHT=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("server.api_prefix", "/api")?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("cors.handle_preflight", true)?
        .set_default("service.name", "postline")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），如 POSTLINE_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("POSTLINE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let prefix = &config.server.api_prefix;
    if !prefix.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "API prefix must start with '/': {:?}",
            prefix
        )));
    }
    if prefix.len() > 1 && prefix.ends_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "API prefix must not end with '/': {:?}",
            prefix
        )));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    let mut ids = HashSet::new();
    let mut tokens = HashSet::new();
    for user in &config.seed.users {
        if user.token.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Seed user {} has an empty token",
                user.id
            )));
        }
        if !ids.insert(user.id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Duplicate seed user id: {}",
                user.id
            )));
        }
        if !tokens.insert(user.token.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Duplicate seed token for user {}",
                user.id
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("API Prefix: {}", config.server.api_prefix);
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("CORS Preflight: {}", config.cors.handle_preflight);
    tracing::info!("Service Name: {}", config.service.name);
    tracing::info!("Seed Users: {}", config.seed.users.len());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedUser;
    use std::io::Write;

    fn seed_user(id: &str, token: &str) -> SeedUser {
        SeedUser {
            id: id.to_string(),
            name: format!("user {}", id),
            token: token.to_string(),
        }
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_of_api_prefix() {
        let mut config = AppConfig::default();
        config.server.api_prefix = "/".to_string();
        assert!(validate_config(&config).is_ok());

        for bad in ["", "api", "/api/"] {
            config.server.api_prefix = bad.to_string();
            assert!(validate_config(&config).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_validation_of_seed_users() {
        let mut config = AppConfig::default();
        config.seed.users = vec![seed_user("1", "a"), seed_user("2", "b")];
        assert!(validate_config(&config).is_ok());

        config.seed.users = vec![seed_user("1", "a"), seed_user("1", "b")];
        assert!(validate_config(&config).is_err());

        config.seed.users = vec![seed_user("1", "a"), seed_user("2", "a")];
        assert!(validate_config(&config).is_err());

        config.seed.users = vec![seed_user("1", "")];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postline.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8088
api_prefix = "/v1"

[service]
description = "test instance"

[[seed.users]]
id = "123"
name = "alice"
token = "secret"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.api_prefix, "/v1");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.service.name, "postline");
        assert_eq!(config.service.description.as_deref(), Some("test instance"));
        assert_eq!(config.seed.users.len(), 1);
        assert_eq!(config.seed.users[0].token, "secret");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postline.toml");
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();

        let err = load_config_from_path(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_parse_error_message_has_single_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postline.toml");
        std::fs::write(&path, "[server]\nport = \"not-a-port\"\n").unwrap();

        let err = load_config_from_path(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        let message = err.to_string();
        assert!(message.starts_with("Failed to parse configuration: "));
        assert_eq!(message.matches("Failed to").count(), 1, "{message}");
    }
}
