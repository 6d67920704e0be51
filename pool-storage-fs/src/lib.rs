use std::{io::ErrorKind, path::PathBuf};

use tokio::io::AsyncWriteExt;

use pool_server_app::{
    domain::background::is_valid_key,
    ports::background_storage::{BackgroundStoragePort, StorageError},
};

/// Keeps background images as plain files in one directory. The directory is
/// served statically under `/storage/backgrounds`.
pub struct FsBackgroundStorage {
    dir: PathBuf,
    public_base_url: String,
}

impl FsBackgroundStorage {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::Io(format!("invalid object key '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

fn io_error(e: std::io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound,
        ErrorKind::AlreadyExists => StorageError::AlreadyExists,
        _ => StorageError::Io(e.to_string()),
    }
}

#[async_trait::async_trait]
impl BackgroundStoragePort for FsBackgroundStorage {
    async fn list_objects(&self) -> Result<Vec<String>, StorageError> {
        let mut read_dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        let mut keys = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            let is_file = entry
                .file_type()
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?
                .is_file();
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if is_file && is_valid_key(&name) {
                keys.push(name);
            }
        }
        keys.sort_unstable_by(|a, b| b.cmp(a));
        Ok(keys)
    }

    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(io_error)?;
        file.write_all(&bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        log::debug!("Stored {} ({}) at {}", key, content_type, path.display());
        Ok(())
    }

    async fn remove_object(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::remove_file(&path).await.map_err(io_error)
    }

    async fn contains_object(&self, key: &str) -> Result<bool, StorageError> {
        if !is_valid_key(key) {
            return Ok(false);
        }
        tokio::fs::try_exists(self.dir.join(key))
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/storage/backgrounds/{}", self.public_base_url, key)
    }
}
