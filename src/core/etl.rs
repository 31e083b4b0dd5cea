use crate::core::Pipeline;
use crate::utils::error::CsvGenerationError;
use std::path::PathBuf;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// fetch → join → write，回傳 CSV 的絕對路徑
    pub async fn generate_csv(&self) -> Result<PathBuf, CsvGenerationError> {
        tracing::debug!("Fetching collections...");
        let collections = self.pipeline.extract().await?;
        tracing::debug!(
            "Fetched users={}, posts={}, comments={}",
            collections.users.len(),
            collections.posts.len(),
            collections.comments.len()
        );

        let rows = self.pipeline.transform(collections).await?;
        tracing::info!("Joined {} rows", rows.len());

        let output_path = self.pipeline.load(rows).await?;
        tracing::info!("📁 CSV saved to: {}", output_path.display());

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Collection, Collections, JoinedRow, UserRecord};
    use crate::utils::error::FetchError;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct StubPipeline {
        fail_fetch: bool,
        loaded: AtomicBool,
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<Collections, FetchError> {
            if self.fail_fetch {
                return Err(FetchError::Status {
                    collection: Collection::Comments,
                    status: reqwest::StatusCode::BAD_GATEWAY,
                });
            }
            Ok(Collections {
                users: vec![UserRecord::default()],
                ..Default::default()
            })
        }

        async fn transform(
            &self,
            data: Collections,
        ) -> Result<Vec<JoinedRow>, CsvGenerationError> {
            assert_eq!(data.users.len(), 1);
            Ok(Vec::new())
        }

        async fn load(&self, rows: Vec<JoinedRow>) -> Result<PathBuf, CsvGenerationError> {
            assert!(rows.is_empty());
            self.loaded.store(true, Ordering::SeqCst);
            Ok(PathBuf::from("/tmp/output.csv"))
        }
    }

    #[tokio::test]
    async fn test_generate_csv_runs_all_stages() {
        let engine = EtlEngine::new(StubPipeline {
            fail_fetch: false,
            loaded: AtomicBool::new(false),
        });

        let path = engine.generate_csv().await.unwrap();

        assert_eq!(path, PathBuf::from("/tmp/output.csv"));
        assert!(engine.pipeline.loaded.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_generate_csv_wraps_fetch_error_and_skips_load() {
        let engine = EtlEngine::new(StubPipeline {
            fail_fetch: true,
            loaded: AtomicBool::new(false),
        });

        let err = engine.generate_csv().await.unwrap_err();

        assert!(matches!(err, CsvGenerationError::Fetch(_)));
        assert_eq!(err.to_string(), "Error generating CSV file");
        assert!(err
            .detail()
            .starts_with("Error generating CSV file: Failed to fetch data from one or more APIs"));
        assert!(err.detail().contains("comments"));
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }
}
