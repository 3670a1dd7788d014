use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub favicon: String,
    pub footer_year: u16,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "ML Engineer Portfolio".to_string(),
            favicon: "🧠".to_string(),
            footer_year: 2023,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub resume_path: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            resume_path: "resume.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
    #[default]
    Log,
    Webhook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub delivery: DeliveryKind,
    pub webhook_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delivery: DeliveryKind::Log,
            webhook_url: None,
            timeout_seconds: 10,
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WEBHOOK_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.title", &self.site.title)?;
        validation::validate_socket_addr("server.bind", &self.server.bind)?;
        validation::validate_path("assets.resume_path", &self.assets.resume_path)?;
        validation::validate_range(
            "contact.timeout_seconds",
            self.contact.timeout_seconds,
            1,
            120,
        )?;

        if self.contact.delivery == DeliveryKind::Webhook {
            let url = validation::validate_required_field(
                "contact.webhook_url",
                &self.contact.webhook_url,
            )?;
            validation::validate_url("contact.webhook_url", url)?;
        }

        tracing::debug!("✅ Site configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.title, "ML Engineer Portfolio");
        assert_eq!(config.site.favicon, "🧠");
        assert_eq!(config.contact.delivery, DeliveryKind::Log);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_tables() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
title = "Alex Johnson"

[contact]
delivery = "webhook"
webhook_url = "https://hooks.example.com/contact"
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Alex Johnson");
        assert_eq!(config.site.footer_year, 2023);
        assert_eq!(config.contact.delivery, DeliveryKind::Webhook);
        assert_eq!(config.contact.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_webhook_requires_url() {
        let config = SiteConfig::from_toml_str("[contact]\ndelivery = \"webhook\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(PortfolioError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_bind_rejected() {
        let config = SiteConfig::from_toml_str("[server]\nbind = \"nowhere\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("PORTFOLIO_TEST_TITLE", "From Env");
        let config =
            SiteConfig::from_toml_str("[site]\ntitle = \"${PORTFOLIO_TEST_TITLE}\"\n").unwrap();
        assert_eq!(config.site.title, "From Env");
    }

    #[test]
    fn test_unknown_delivery_kind_is_parse_error() {
        let result = SiteConfig::from_toml_str("[contact]\ndelivery = \"pigeon\"\n");
        assert!(matches!(
            result,
            Err(PortfolioError::ConfigValidationError { .. })
        ));
    }
}
