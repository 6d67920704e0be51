#[async_trait::async_trait]
pub trait BackgroundStoragePort {
    /// Object keys, newest upload first.
    async fn list_objects(&self) -> Result<Vec<String>, StorageError>;
    /// Stores a new object. Never replaces an existing key.
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
    async fn remove_object(&self, key: &str) -> Result<(), StorageError>;
    async fn contains_object(&self, key: &str) -> Result<bool, StorageError>;
    fn public_url(&self, key: &str) -> String;
}

#[derive(Debug, Clone)]
pub enum StorageError {
    NotFound,
    /// An object with the same key is already stored.
    AlreadyExists,
    Io(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound => write!(f, "Object not found"),
            StorageError::AlreadyExists => write!(f, "Object already exists"),
            StorageError::Io(e) => write!(f, "Storage I/O error: {}", e),
        }
    }
}
