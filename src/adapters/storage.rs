use crate::domain::ports::Storage;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 本機輸出目錄
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// 建立輸出目錄（已存在則略過）並解析為絕對路徑
    pub fn init(base_path: impl AsRef<Path>) -> std::io::Result<Self> {
        let base_path = base_path.as_ref();
        fs::create_dir_all(base_path)?;
        let base_path = fs::canonicalize(base_path)?;

        tracing::debug!("Output directory ready: {}", base_path.display());
        Ok(Self { base_path })
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, file_name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let full_path = self.base_path.join(file_name);

        // 先寫入同目錄的暫存檔再 rename，失敗時舊檔保持不變
        let mut temp_file = NamedTempFile::new_in(&self.base_path)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&full_path).map_err(|e| e.error)?;

        Ok(full_path)
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}
