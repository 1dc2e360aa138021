use super::{ConfigError, ConfigResult, GatewayConfig, PersistenceBackend, SheetsConfig};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &GatewayConfig) -> ConfigResult<()> {
        Self::validate_server_settings(config)?;
        Self::validate_persistence(config)?;

        if let Some(sheets) = &config.sheets {
            Self::validate_sheets(sheets)?;
        }

        if config.gemini.model.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "gemini.model".to_string(),
            });
        }

        Ok(())
    }

    fn validate_server_settings(config: &GatewayConfig) -> ConfigResult<()> {
        if config.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                value: config.port.to_string(),
                reason: "port must be non-zero".to_string(),
            });
        }

        if config.host.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "host".to_string(),
            });
        }

        if !config.public_url.starts_with("http://") && !config.public_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "public_url".to_string(),
                value: config.public_url.clone(),
                reason: "must be an absolute http(s) URL".to_string(),
            });
        }

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                value: config.request_timeout_secs.to_string(),
                reason: "timeout must be non-zero".to_string(),
            });
        }

        Ok(())
    }

    fn validate_persistence(config: &GatewayConfig) -> ConfigResult<()> {
        if config.persistence_backend == PersistenceBackend::Postgres {
            match &config.database_url {
                Some(url) if !url.is_empty() => {}
                _ => {
                    return Err(ConfigError::MissingRequired {
                        field: "database_url".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_sheets(sheets: &SheetsConfig) -> ConfigResult<()> {
        if sheets.service_account_email.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "sheets.service_account_email".to_string(),
            });
        }
        if sheets.private_key.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "sheets.private_key".to_string(),
            });
        }
        if sheets.sheet_id.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "sheets.sheet_id".to_string(),
            });
        }
        Ok(())
    }
}
