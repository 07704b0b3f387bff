use crate::domain::ValidationConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For production, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: ValidationConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified validation config.
    #[must_use]
    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn validation_config(&self) -> ValidationConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Production Config Loading (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use std::net::IpAddr;
    use std::path::Path;
    use thiserror::Error;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ConfigFile {
        #[serde(default)]
        protocol: ProtocolSection,
        #[serde(default)]
        local_addresses: LocalAddressSection,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    struct ProtocolSection {
        #[serde(default)]
        whitelist: Vec<String>,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    struct LocalAddressSection {
        refresh_secs: Option<u64>,
        #[serde(default)]
        extra: Vec<String>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [protocol]
    /// whitelist = ["dp:4.24.0", "dp:4.21.2"]
    ///
    /// [local_addresses]
    /// refresh_secs = 60
    /// extra = ["203.0.113.7"]
    /// ```
    pub struct TomlConfigProvider {
        config: ValidationConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or holds an
        /// address that is not an IP literal.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let protocol_whitelist = file
                .protocol
                .whitelist
                .iter()
                .map(|entry| entry.trim())
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect();

            let extra_local_addresses = file
                .local_addresses
                .extra
                .iter()
                .map(|s| {
                    s.trim()
                        .parse::<IpAddr>()
                        .map_err(|_| ConfigError::Invalid(format!("not an IP address: {:?}", s)))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let defaults = ValidationConfig::default();
            let config = ValidationConfig {
                protocol_whitelist,
                local_address_refresh_secs: file
                    .local_addresses
                    .refresh_secs
                    .unwrap_or(defaults.local_address_refresh_secs),
                extra_local_addresses,
            };

            Ok(Self { config })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn validation_config(&self) -> ValidationConfig {
            self.config.clone()
        }
    }

    /// Errors that can occur during config loading.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("Failed to read {path}: {error}")]
        Io {
            /// Path of the file that failed to load.
            path: String,
            /// Error message from the I/O operation.
            error: String,
        },
        /// TOML parsing error.
        #[error("Failed to parse config: {0}")]
        Parse(String),
        /// A value parsed but is not acceptable.
        #[error("Invalid config: {0}")]
        Invalid(String),
    }
}

#[cfg(feature = "toml-config")]
pub use toml_config::{ConfigError, TomlConfigProvider};
