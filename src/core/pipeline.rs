use crate::adapters::http::CollectionClient;
use crate::core::{
    Collection, Collections, CommentRecord, ConfigProvider, JoinedRow, Pipeline, PostRecord,
    Storage, UserRecord,
};
use crate::domain::model::{field_or_default, CSV_HEADER};
use crate::utils::error::{CsvGenerationError, FetchError};
use std::path::PathBuf;

/// users / posts / comments 三個集合依索引合併為 CSV
pub struct JoinPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: CollectionClient,
}

impl<S: Storage, C: ConfigProvider> JoinPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let client = CollectionClient::new(config.request_timeout());
        Self {
            storage,
            config,
            client,
        }
    }
}

/// 依位置合併，列數為最短集合的長度
pub fn join_rows(data: &Collections) -> Vec<JoinedRow> {
    let row_count = data.row_count();

    if row_count < data.users.len().max(data.posts.len()).max(data.comments.len()) {
        tracing::debug!(
            "Truncating to {} rows (users={}, posts={}, comments={})",
            row_count,
            data.users.len(),
            data.posts.len(),
            data.comments.len()
        );
    }

    data.users
        .iter()
        .zip(&data.posts)
        .zip(&data.comments)
        .enumerate()
        .map(|(i, ((user, post), comment))| JoinedRow {
            id: i + 1,
            name: field_or_default(user.name.as_ref()),
            title: field_or_default(post.title.as_ref()),
            body: field_or_default(comment.body.as_ref()),
        })
        .collect()
}

/// 序列化為 CSV；沒有資料列時仍輸出表頭
pub fn render_csv(rows: &[JoinedRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for JoinPipeline<S, C> {
    async fn extract(&self) -> Result<Collections, FetchError> {
        // 三個請求並行，任一失敗即中止
        let (users, posts, comments) = tokio::try_join!(
            self.client
                .fetch::<UserRecord>(Collection::Users, self.config.users_endpoint()),
            self.client
                .fetch::<PostRecord>(Collection::Posts, self.config.posts_endpoint()),
            self.client
                .fetch::<CommentRecord>(Collection::Comments, self.config.comments_endpoint()),
        )?;

        Ok(Collections {
            users,
            posts,
            comments,
        })
    }

    async fn transform(&self, data: Collections) -> Result<Vec<JoinedRow>, CsvGenerationError> {
        Ok(join_rows(&data))
    }

    async fn load(&self, rows: Vec<JoinedRow>) -> Result<PathBuf, CsvGenerationError> {
        let csv_data = render_csv(&rows)?;

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            rows.len(),
            csv_data.len(),
            self.config.output_file_name()
        );
        let path = self
            .storage
            .write_file(self.config.output_file_name(), &csv_data)
            .await?;

        Ok(path)
    }
}
