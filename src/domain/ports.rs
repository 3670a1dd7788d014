use crate::domain::model::ContactMessage;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Destination for accepted contact form messages.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<()>;

    fn name(&self) -> &str;
}
