use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;

/// 寫入本機檔案系統；既有檔案會被覆寫，上層目錄不會自動建立
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data)?;
        Ok(())
    }
}
