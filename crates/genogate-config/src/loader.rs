// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Loading happens in three tiers:
//! 1. TOML file (base values, or built-in defaults when no file exists)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, GatewayConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "genogate.toml";

/// Find the genogate configuration file
///
/// Search order:
/// 1. `GENOGATE_CONFIG_PATH` environment variable
/// 2. Current working directory: `./genogate.toml`
/// 3. Parent directories (up to 5 levels)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("GENOGATE_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by GENOGATE_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet GENOGATE_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, the file is searched for
///   and built-in defaults are used when none exists.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if an explicitly requested file is missing or unreadable, or if
/// the file contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<GatewayConfig> {
    let mut config = match config_path {
        Some(path) => read_config_file(path)?,
        None => match find_config_file() {
            Ok(path) => read_config_file(&path)?,
            // An explicit GENOGATE_CONFIG_PATH that does not exist is still an error
            Err(err) if env::var("GENOGATE_CONFIG_PATH").is_ok() => return Err(err),
            Err(_) => GatewayConfig::default(),
        },
    };

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

fn read_config_file(path: &Path) -> ConfigResult<GatewayConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `GENOGATE_API_HOST` -> `api.host`
/// - `GENOGATE_API_PORT` -> `api.port`
/// - `GENOGATE_MODEL_ENDPOINT` -> `model.endpoint`
/// - `GENOGATE_LOG_LEVEL` -> `logging.log_level`
/// - `GENOGATE_LOG_DIR` -> `logging.log_dir`
/// - `GENOGATE_CORS_ORIGINS` -> `cors.allowed_origins` (comma-separated)
pub fn apply_environment_overrides(config: &mut GatewayConfig) {
    if let Ok(value) = env::var("GENOGATE_API_HOST") {
        config.api.host = value;
    }
    if let Ok(value) = env::var("GENOGATE_API_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Ok(value) = env::var("GENOGATE_MODEL_ENDPOINT") {
        config.model.endpoint = Some(value).filter(|v| !v.is_empty());
    }
    if let Ok(value) = env::var("GENOGATE_LOG_LEVEL") {
        config.logging.log_level = value;
    }
    if let Ok(value) = env::var("GENOGATE_LOG_DIR") {
        config.logging.log_dir = Some(value).filter(|v| !v.is_empty()).map(PathBuf::from);
    }
    if let Ok(value) = env::var("GENOGATE_CORS_ORIGINS") {
        config.cors.allowed_origins = split_list(&value);
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - Map of CLI arguments (e.g., `{"api_host": "192.168.1.1", "api_port": "9000"}`)
pub fn apply_cli_overrides(config: &mut GatewayConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("api_host") {
        config.api.host = value.clone();
    }
    if let Some(value) = cli_args.get("api_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Some(value) = cli_args.get("model_endpoint") {
        config.model.endpoint = Some(value.clone()).filter(|v| !v.is_empty());
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.log_level = value.clone();
    }
    if let Some(value) = cli_args.get("log_dir") {
        config.logging.log_dir = Some(value.clone()).filter(|v| !v.is_empty()).map(PathBuf::from);
    }
    if let Some(value) = cli_args.get("cors_origins") {
        config.cors.allowed_origins = split_list(value);
    }
}

/// Collect `--key=value` arguments into override keys (`--api-port=9000` -> `api_port`)
///
/// Arguments without a value (such as `--debug-all`) are ignored here.
pub fn parse_cli_args<I>(args: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .filter_map(|arg| {
            let stripped = arg.strip_prefix("--")?;
            let (key, value) = stripped.split_once('=')?;
            Some((key.replace('-', "_"), value.to_string()))
        })
        .collect()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const OVERRIDE_VARS: &[&str] = &[
        "GENOGATE_API_HOST",
        "GENOGATE_API_PORT",
        "GENOGATE_MODEL_ENDPOINT",
        "GENOGATE_LOG_LEVEL",
        "GENOGATE_LOG_DIR",
        "GENOGATE_CORS_ORIGINS",
    ];

    fn clear_override_vars() {
        for var in OVERRIDE_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var("GENOGATE_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var("GENOGATE_CONFIG_PATH");

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_missing_explicit_env_path_is_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        env::set_var("GENOGATE_CONFIG_PATH", missing.to_str().unwrap());
        let result = load_config(None, None);
        env::remove_var("GENOGATE_CONFIG_PATH");

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_override_vars();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[api]").unwrap();
        writeln!(file, "port = 9000").unwrap();
        writeln!(file, "[model]").unwrap();
        writeln!(file, "endpoint = \"http://model.local:7000\"").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.model.endpoint.as_deref(), Some("http://model.local:7000"));
        assert_eq!(config.analysis.values_sample_rows, 100);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[api\nport = ").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = GatewayConfig::default();

        env::set_var("GENOGATE_API_HOST", "192.168.1.100");
        env::set_var("GENOGATE_API_PORT", "9999");
        env::set_var("GENOGATE_CORS_ORIGINS", "https://a.example, https://b.example");

        apply_environment_overrides(&mut config);
        clear_override_vars();

        assert_eq!(config.api.host, "192.168.1.100");
        assert_eq!(config.api.port, 9999);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_unparseable_port_override_is_ignored() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = GatewayConfig::default();

        env::set_var("GENOGATE_API_PORT", "not-a-port");
        apply_environment_overrides(&mut config);
        clear_override_vars();

        assert_eq!(config.api.port, 8000);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = GatewayConfig::default();
        let cli_args = parse_cli_args(vec![
            "genogate".to_string(),
            "--api-host=10.0.0.1".to_string(),
            "--api-port=7777".to_string(),
            "--model-endpoint=http://10.0.0.2:9000".to_string(),
            "--log-dir=/var/log/genogate".to_string(),
            "--debug-all".to_string(),
        ]);

        apply_cli_overrides(&mut config, &cli_args);
        assert_eq!(config.logging.log_dir, Some(PathBuf::from("/var/log/genogate")));

        assert_eq!(config.api.host, "10.0.0.1");
        assert_eq!(config.api.port, 7777);
        assert_eq!(config.model.endpoint.as_deref(), Some("http://10.0.0.2:9000"));
        assert!(!cli_args.contains_key("debug_all"));
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_override_vars();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[api]").unwrap();
        writeln!(file, "host = \"file-host\"").unwrap();
        writeln!(file, "port = 8000").unwrap();

        env::set_var("GENOGATE_API_HOST", "env-host");
        env::set_var("GENOGATE_API_PORT", "9000");

        let mut cli_args = HashMap::new();
        cli_args.insert("api_host".to_string(), "cli-host".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args)).unwrap();
        clear_override_vars();

        // CLI wins for host, env wins for port (no CLI override)
        assert_eq!(config.api.host, "cli-host");
        assert_eq!(config.api.port, 9000);
    }
}
