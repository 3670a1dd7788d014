use crate::config::toml_config::{ContactConfig, DeliveryKind};
use crate::domain::model::ContactMessage;
use crate::domain::ports::MessageSink;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Accepts every message and only records it in the log. Nothing leaves the process.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

#[async_trait]
impl MessageSink for LogSink {
    async fn deliver(&self, message: &ContactMessage) -> Result<()> {
        tracing::info!(
            "📬 Contact message from {} <{}>, subject: {:?}",
            message.name,
            message.email,
            message.subject
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

/// Keeps delivered messages in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl MessageSink for MemorySink {
    async fn deliver(&self, message: &ContactMessage) -> Result<()> {
        self.messages.lock().await.push(message.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// POSTs each message as JSON to an external endpoint (email API, ticketing, chat hook).
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: Client,
    endpoint: String,
}

impl WebhookSink {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MessageSink for WebhookSink {
    async fn deliver(&self, message: &ContactMessage) -> Result<()> {
        tracing::debug!("Posting contact message to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Webhook response status: {}", status);

        if !status.is_success() {
            return Err(PortfolioError::DeliveryError {
                message: format!("webhook responded with {}", status),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

pub fn build_sink(config: &ContactConfig) -> Result<Arc<dyn MessageSink>> {
    match config.delivery {
        DeliveryKind::Log => Ok(Arc::new(LogSink)),
        DeliveryKind::Webhook => {
            let url = validate_required_field("contact.webhook_url", &config.webhook_url)?;
            let sink = WebhookSink::new(url.as_str(), Duration::from_secs(config.timeout_seconds))?;
            tracing::info!("🔗 Contact messages will be posted to {}", sink.endpoint());
            Ok(Arc::new(sink))
        }
    }
}
