pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{
    Collection, Collections, CommentRecord, JoinedRow, PostRecord, UserRecord,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
