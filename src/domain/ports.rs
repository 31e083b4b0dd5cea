use crate::domain::model::{Collections, JoinedRow};
use crate::utils::error::{CsvGenerationError, FetchError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// 整檔覆寫，回傳寫入檔案的絕對路徑
    fn write_file(
        &self,
        file_name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = std::io::Result<PathBuf>> + Send;

    fn root(&self) -> &Path;
}

pub trait ConfigProvider: Send + Sync {
    fn users_endpoint(&self) -> &str;
    fn posts_endpoint(&self) -> &str;
    fn comments_endpoint(&self) -> &str;
    fn output_file_name(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Collections, FetchError>;
    async fn transform(&self, data: Collections) -> Result<Vec<JoinedRow>, CsvGenerationError>;
    async fn load(&self, rows: Vec<JoinedRow>) -> Result<PathBuf, CsvGenerationError>;
}
