use crate::domain::model::Collection;
use thiserror::Error;

/// 任一集合抓取失敗時回傳，整個操作隨之中止
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch data from one or more APIs: {collection} request failed: {source}")]
    Request {
        collection: Collection,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch data from one or more APIs: {collection} endpoint returned {status}")]
    Status {
        collection: Collection,
        status: reqwest::StatusCode,
    },

    #[error("Failed to fetch data from one or more APIs: {collection} response is not a JSON array of objects: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn collection(&self) -> Collection {
        match self {
            FetchError::Request { collection, .. }
            | FetchError::Status { collection, .. }
            | FetchError::Decode { collection, .. } => *collection,
        }
    }
}

/// 對外訊息一律相同，細節只留在 source 鏈（寫入日誌）
#[derive(Error, Debug)]
pub enum CsvGenerationError {
    #[error("Error generating CSV file")]
    Fetch(#[from] FetchError),

    #[error("Error generating CSV file")]
    Csv(#[from] csv::Error),

    #[error("Error generating CSV file")]
    Io(#[from] std::io::Error),
}

impl CsvGenerationError {
    /// 含完整 source 鏈的描述，只用於日誌
    pub fn detail(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}

/// 啟動與配置階段的錯誤
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
