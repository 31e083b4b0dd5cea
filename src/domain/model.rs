use serde::{Deserialize, Serialize};
use std::fmt;

/// 欄位缺漏時的預設值
pub const PLACEHOLDER: &str = "N/A";

/// CSV 固定表頭
pub const CSV_HEADER: [&str; 4] = ["ID", "Name", "Title", "Body"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Posts,
    Comments,
}

impl Collection {
    /// 該集合貢獻到輸出列的欄位
    pub fn field(&self) -> &'static str {
        match self {
            Collection::Users => "name",
            Collection::Posts => "title",
            Collection::Comments => "body",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Posts => "posts",
            Collection::Comments => "comments",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub title: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommentRecord {
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub users: Vec<UserRecord>,
    pub posts: Vec<PostRecord>,
    pub comments: Vec<CommentRecord>,
}

impl Collections {
    /// 最短集合的長度，較長集合多出的部分會被捨棄
    pub fn row_count(&self) -> usize {
        self.users
            .len()
            .min(self.posts.len())
            .min(self.comments.len())
    }
}

/// 輸出 CSV 的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRow {
    #[serde(rename = "ID")]
    pub id: usize,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body")]
    pub body: String,
}

/// 取欄位值，只有缺漏或 null 時回傳 [`PLACEHOLDER`]
pub fn field_or_default(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => PLACEHOLDER.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
