use crate::domain::model::{ExtractResult, RenderedBlocklist};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sources(&self) -> &[String];
    fn output_file(&self) -> &str;
    fn request_timeout(&self) -> u64;
    fn cidr_first(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractResult>;
    async fn transform(&self, data: ExtractResult) -> Result<RenderedBlocklist>;
    async fn load(&self, result: RenderedBlocklist) -> Result<String>;
}
