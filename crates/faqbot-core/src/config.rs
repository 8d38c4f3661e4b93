//! Faqbot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FaqbotError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqbotConfig {
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Default for FaqbotConfig {
    fn default() -> Self {
        Self {
            notion: NotionConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl FaqbotConfig {
    /// Load config from the default path (~/.faqbot/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from a specific path. Env overrides are NOT applied here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FaqbotError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| FaqbotError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| FaqbotError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".faqbot")
            .join("config.toml")
    }

    /// Secrets and collection ids may come from the process environment,
    /// which always wins over the config file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("NOTION_TOKEN") {
            self.notion.token = token;
        }
        if let Ok(id) = std::env::var("NOTION_DATABASE_ID") {
            self.notion.knowledge_db = id;
        }
        if let Ok(id) = std::env::var("NOTION_LEADS_DATABASE_ID") {
            self.notion.leads_db = id;
        }
    }
}

/// Notion collaborator configuration: integration token plus the two
/// database ids (knowledge base and leads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub knowledge_db: String,
    #[serde(default)]
    pub leads_db: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            knowledge_db: String::new(),
            leads_db: String::new(),
        }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 { 3000 }
fn default_host() -> String { "127.0.0.1".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FaqbotConfig::default();
        assert_eq!(config.gateway.port, 3000);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert!(config.notion.token.is_empty());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [notion]
            token = "secret_abc"
            knowledge_db = "db-knowledge"
            leads_db = "db-leads"

            [gateway]
            port = 8080
        "#;

        let config: FaqbotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notion.token, "secret_abc");
        assert_eq!(config.notion.knowledge_db, "db-knowledge");
        assert_eq!(config.gateway.port, 8080);
        // host not set, default applies
        assert_eq!(config.gateway.host, "127.0.0.1");
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let toml_str = "";
        let config: FaqbotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gateway.port, 3000);
        assert!(config.notion.leads_db.is_empty());
    }

    #[test]
    fn test_default_path_under_home() {
        let path = FaqbotConfig::default_path();
        assert!(path.to_string_lossy().contains("faqbot"));
    }
}
