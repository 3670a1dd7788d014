use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Webhook request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Rating for '{skill}' must be within [0, 1], got {value}")]
    InvalidRating { skill: String, value: f64 },

    #[error("Message delivery failed: {message}")]
    DeliveryError { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::NotFound { .. } => ErrorSeverity::Low,
            PortfolioError::HttpError(_) | PortfolioError::DeliveryError { .. } => {
                ErrorSeverity::Medium
            }
            PortfolioError::ConfigError { .. }
            | PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. }
            | PortfolioError::InvalidRating { .. }
            | PortfolioError::SerializationError(_) => ErrorSeverity::High,
            PortfolioError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::HttpError(_) | PortfolioError::DeliveryError { .. } => {
                "The contact message could not be delivered".to_string()
            }
            PortfolioError::IoError(e) => format!("File system error: {}", e),
            PortfolioError::NotFound { resource } => format!("{} is not available", resource),
            PortfolioError::InvalidRating { skill, .. } => {
                format!("Skill rating for '{}' is out of range", skill)
            }
            other => format!("Invalid configuration: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::HttpError(_) | PortfolioError::DeliveryError { .. } => {
                "Check that the webhook endpoint is reachable and returns a 2xx status"
            }
            PortfolioError::IoError(_) => "Check file paths and permissions",
            PortfolioError::NotFound { .. } => "Place the asset at the configured path",
            PortfolioError::InvalidRating { .. } => "Use ratings between 0.0 and 1.0",
            PortfolioError::SerializationError(_) => "Check the content for values JSON cannot represent",
            _ => "Review the TOML configuration file and command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
