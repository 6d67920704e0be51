use std::sync::Arc;

use chrono::Utc;

use crate::{
    domain::{
        background::{Background, background_key, retry_key},
        settings::{BACKGROUND_IMAGE, SettingsRepository},
    },
    ports::background_storage::{BackgroundStoragePort, StorageError},
};

const MAX_KEY_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone)]
pub struct BackgroundUpload {
    pub bytes: Vec<u8>,
    pub original_name: String,
    pub content_type: String,
    pub activate: bool,
}

#[derive(Debug, Clone)]
pub struct UploadedBackground {
    pub background: Background,
    pub activated: bool,
}

#[async_trait::async_trait]
pub trait UploadBackgroundUseCase {
    /// Stores the image and, if requested, makes it the active background.
    /// A failed activation removes the stored image again.
    async fn upload(
        &self,
        upload: BackgroundUpload,
    ) -> Result<UploadedBackground, UploadBackgroundError>;
}

#[derive(Debug)]
pub enum UploadBackgroundError {
    EmptyFile,
    UnsupportedType(String),
    StorageError,
    ActivationFailed,
}

pub struct UploadBackgroundUseCaseImpl<B: BackgroundStoragePort, S: SettingsRepository> {
    storage: Arc<B>,
    settings_repository: Arc<S>,
}

impl<B: BackgroundStoragePort, S: SettingsRepository> UploadBackgroundUseCaseImpl<B, S> {
    pub fn new(storage: Arc<B>, settings_repository: Arc<S>) -> Self {
        Self {
            storage,
            settings_repository,
        }
    }
}

#[async_trait::async_trait]
impl<B, S> UploadBackgroundUseCase for UploadBackgroundUseCaseImpl<B, S>
where
    B: BackgroundStoragePort + Send + Sync + 'static,
    S: SettingsRepository + Send + Sync + 'static,
{
    async fn upload(
        &self,
        upload: BackgroundUpload,
    ) -> Result<UploadedBackground, UploadBackgroundError> {
        if upload.bytes.is_empty() {
            return Err(UploadBackgroundError::EmptyFile);
        }
        if !upload.content_type.starts_with("image/") {
            return Err(UploadBackgroundError::UnsupportedType(upload.content_type));
        }

        let base_key = background_key(Utc::now(), &upload.original_name);
        let key = match put_new_object(
            self.storage.as_ref(),
            &base_key,
            upload.bytes,
            &upload.content_type,
        )
        .await
        {
            Ok(key) => key,
            Err(e) => {
                log::error!("Error storing background '{}': {}", base_key, e);
                return Err(UploadBackgroundError::StorageError);
            }
        };
        let public_url = self.storage.public_url(&key);
        log::info!("Stored background '{}'", key);

        if upload.activate {
            if let Err(e) = self
                .settings_repository
                .set_setting(BACKGROUND_IMAGE, &public_url)
                .await
            {
                log::error!("Error activating background '{}': {}", key, e);
                if let Err(e) = self.storage.remove_object(&key).await {
                    log::error!(
                        "Background '{}' stored but neither activated nor removed: {}",
                        key,
                        e
                    );
                }
                return Err(UploadBackgroundError::ActivationFailed);
            }
        }

        Ok(UploadedBackground {
            background: Background { key, public_url },
            activated: upload.activate,
        })
    }
}

/// Stores under `key`, falling back to [`retry_key`] variants while the key
/// is taken. Returns the key actually used.
async fn put_new_object<B: BackgroundStoragePort + Sync>(
    storage: &B,
    key: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<String, StorageError> {
    let mut attempt = 0;
    loop {
        let candidate = retry_key(key, attempt);
        match storage
            .put_object(&candidate, bytes.clone(), content_type)
            .await
        {
            Ok(()) => return Ok(candidate),
            Err(StorageError::AlreadyExists) if attempt + 1 < MAX_KEY_ATTEMPTS => {
                log::debug!("Background key '{}' is taken", candidate);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::testing::{MockBackgroundStorage, MockSettingsRepository};

    fn png(activate: bool) -> BackgroundUpload {
        BackgroundUpload {
            bytes: vec![0x89, b'P', b'N', b'G'],
            original_name: "augusta 12th.png".to_string(),
            content_type: "image/png".to_string(),
            activate,
        }
    }

    #[tokio::test]
    async fn test_upload_and_activate() {
        let storage = Arc::new(MockBackgroundStorage::default());
        let settings = Arc::new(MockSettingsRepository::default());
        let use_case = UploadBackgroundUseCaseImpl::new(storage.clone(), settings.clone());

        let uploaded = use_case.upload(png(true)).await.unwrap();
        assert!(uploaded.activated);
        assert!(uploaded.background.key.ends_with("_augusta_12th.png"));
        assert_eq!(storage.keys(), vec![uploaded.background.key.clone()]);
        assert_eq!(
            settings.value(BACKGROUND_IMAGE),
            Some(uploaded.background.public_url)
        );
    }

    #[tokio::test]
    async fn test_upload_without_activation() {
        let storage = Arc::new(MockBackgroundStorage::default());
        let settings = Arc::new(MockSettingsRepository::default());
        let use_case = UploadBackgroundUseCaseImpl::new(storage.clone(), settings.clone());

        let uploaded = use_case.upload(png(false)).await.unwrap();
        assert!(!uploaded.activated);
        assert_eq!(storage.keys().len(), 1);
        assert_eq!(settings.value(BACKGROUND_IMAGE), None);
    }

    #[tokio::test]
    async fn test_failed_activation_removes_object() {
        let storage = Arc::new(MockBackgroundStorage::default());
        let settings = Arc::new(MockSettingsRepository::default());
        settings.fail_writes.store(true, Ordering::SeqCst);
        let use_case = UploadBackgroundUseCaseImpl::new(storage.clone(), settings.clone());

        assert!(matches!(
            use_case.upload(png(true)).await,
            Err(UploadBackgroundError::ActivationFailed)
        ));
        assert!(storage.keys().is_empty());
    }

    #[tokio::test]
    async fn test_same_key_never_overwrites() {
        let storage = MockBackgroundStorage::default();
        storage
            .put_object("1700000000000_hole.png", vec![1], "image/png")
            .await
            .unwrap();
        storage
            .put_object("1700000000000_1_hole.png", vec![2], "image/png")
            .await
            .unwrap();

        let key = put_new_object(&storage, "1700000000000_hole.png", vec![3], "image/png")
            .await
            .unwrap();
        assert_eq!(key, "1700000000000_2_hole.png");
        assert_eq!(storage.bytes("1700000000000_hole.png"), Some(vec![1]));
        assert_eq!(storage.bytes("1700000000000_1_hole.png"), Some(vec![2]));
        assert_eq!(storage.bytes(&key), Some(vec![3]));

        for attempt in 3..MAX_KEY_ATTEMPTS {
            let taken = retry_key("1700000000000_hole.png", attempt);
            storage.put_object(&taken, vec![0], "image/png").await.unwrap();
        }
        assert!(matches!(
            put_new_object(&storage, "1700000000000_hole.png", vec![4], "image/png").await,
            Err(StorageError::AlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_rejects_bad_uploads() {
        let use_case = UploadBackgroundUseCaseImpl::new(
            Arc::new(MockBackgroundStorage::default()),
            Arc::new(MockSettingsRepository::default()),
        );
        let mut empty = png(true);
        empty.bytes.clear();
        assert!(matches!(
            use_case.upload(empty).await,
            Err(UploadBackgroundError::EmptyFile)
        ));

        let mut text = png(true);
        text.content_type = "text/html".to_string();
        assert!(matches!(
            use_case.upload(text).await,
            Err(UploadBackgroundError::UnsupportedType(_))
        ));
    }
}
