// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation

use crate::{ConfigError, ConfigResult, GatewayConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidPortRange { port_name: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPortRange { port_name, port } => {
                write!(
                    f,
                    "Port {} = {} is outside valid range (1024-65535)",
                    port_name, port
                )
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &GatewayConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_api(config, &mut errors);
    validate_cors(config, &mut errors);
    validate_model(config, &mut errors);
    validate_analysis(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_api(config: &GatewayConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.api.port < 1024 {
        errors.push(ConfigValidationError::InvalidPortRange {
            port_name: "api.port".to_string(),
            port: config.api.port,
        });
    }
    if config.api.host.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "api.host".to_string(),
        });
    }
}

fn validate_cors(config: &GatewayConfig, errors: &mut Vec<ConfigValidationError>) {
    // Credentialed CORS cannot fall back to a wildcard origin
    if config.cors.allow_credentials && config.cors.allowed_origins.is_empty() {
        errors.push(ConfigValidationError::InvalidValue {
            field: "cors.allowed_origins".to_string(),
            reason: "must list at least one origin when allow_credentials is true".to_string(),
        });
    }
    if config.cors.allowed_origins.iter().any(|o| o == "*") && config.cors.allow_credentials {
        errors.push(ConfigValidationError::InvalidValue {
            field: "cors.allowed_origins".to_string(),
            reason: "'*' cannot be combined with allow_credentials".to_string(),
        });
    }
}

fn validate_model(config: &GatewayConfig, errors: &mut Vec<ConfigValidationError>) {
    if let Some(endpoint) = &config.model.endpoint {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            errors.push(ConfigValidationError::InvalidValue {
                field: "model.endpoint".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }
    }
}

fn validate_analysis(config: &GatewayConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.analysis.values_sample_rows == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "analysis.values_sample_rows".to_string(),
            reason: "must be positive".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GatewayConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_port_range() {
        let mut config = GatewayConfig::default();
        config.api.port = 80;

        let result = validate_config(&config);
        match result {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("api.port"));
                assert!(msg.contains("1024-65535"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_host() {
        let mut config = GatewayConfig::default();
        config.api.host = String::new();

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("api.host")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_wildcard_origin_with_credentials() {
        let mut config = GatewayConfig::default();
        config.cors.allowed_origins = vec!["*".to_string()];

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("allow_credentials")),
            other => panic!("expected validation error, got {:?}", other),
        }

        config.cors.allow_credentials = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_model_endpoint_scheme() {
        let mut config = GatewayConfig::default();
        config.model.endpoint = Some("model.local:7000".to_string());
        assert!(validate_config(&config).is_err());

        config.model.endpoint = Some("https://model.local".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_sample_rows() {
        let mut config = GatewayConfig::default();
        config.analysis.values_sample_rows = 0;

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("values_sample_rows"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
