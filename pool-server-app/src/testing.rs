use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use pool_core::{Entry, Golfer, GolferId, NewGolfer};

use crate::{
    domain::{
        EntryId, RepoError, RepoRetrieveError, entry::EntryRepository, roster::RosterRepository,
        settings::SettingsRepository,
    },
    ports::background_storage::{BackgroundStoragePort, StorageError},
};

fn storage_failure() -> RepoError {
    RepoError::StorageError("injected failure".to_string())
}

#[derive(Default)]
pub struct MockRosterRepository {
    golfers: Mutex<Vec<Golfer>>,
    next_id: Mutex<i64>,
    pub fail: AtomicBool,
}

impl MockRosterRepository {
    pub fn with_golfers(golfers: &[(&str, u32)]) -> Self {
        let repo = Self::default();
        for (name, salary) in golfers {
            repo.insert(NewGolfer {
                name: name.to_string(),
                salary: *salary,
            });
        }
        repo
    }

    fn insert(&self, golfer: NewGolfer) -> Golfer {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let golfer = Golfer::new(GolferId(*next_id), golfer.name, golfer.salary);
        self.golfers.lock().unwrap().push(golfer.clone());
        golfer
    }

    pub fn set_salary(&self, id: GolferId, salary: u32) {
        let mut golfers = self.golfers.lock().unwrap();
        if let Some(g) = golfers.iter_mut().find(|g| g.id == id) {
            g.salary = salary;
        }
    }

    pub fn len(&self) -> usize {
        self.golfers.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl RosterRepository for MockRosterRepository {
    async fn list_golfers(&self) -> Result<Vec<Golfer>, RepoError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(storage_failure());
        }
        let mut golfers = self.golfers.lock().unwrap().clone();
        golfers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(golfers)
    }

    async fn add_golfer(&self, golfer: NewGolfer) -> Result<Golfer, RepoError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(storage_failure());
        }
        Ok(self.insert(golfer))
    }

    async fn add_golfers(&self, golfers: Vec<NewGolfer>) -> Result<Vec<Golfer>, RepoError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(storage_failure());
        }
        Ok(golfers.into_iter().map(|g| self.insert(g)).collect())
    }

    async fn remove_golfer(&self, id: GolferId) -> Result<(), RepoRetrieveError> {
        let mut golfers = self.golfers.lock().unwrap();
        let before = golfers.len();
        golfers.retain(|g| g.id != id);
        if golfers.len() == before {
            return Err(RepoRetrieveError::NotFound);
        }
        Ok(())
    }

    async fn clear_golfers(&self) -> Result<u64, RepoError> {
        let mut golfers = self.golfers.lock().unwrap();
        let removed = golfers.len() as u64;
        golfers.clear();
        Ok(removed)
    }
}

#[derive(Default)]
pub struct MockEntryRepository {
    entries: Mutex<Vec<(EntryId, Entry)>>,
    pub fail: AtomicBool,
}

impl MockEntryRepository {
    pub fn entries(&self) -> Vec<(EntryId, Entry)> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EntryRepository for MockEntryRepository {
    async fn create_entry(&self, entry: Entry) -> Result<EntryId, RepoError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(storage_failure());
        }
        let mut entries = self.entries.lock().unwrap();
        let id = EntryId(entries.len() as i64 + 1);
        entries.push((id, entry));
        Ok(id)
    }

    async fn list_entries(&self) -> Result<Vec<(EntryId, Entry)>, RepoError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(storage_failure());
        }
        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at).then(b.0.cmp(&a.0)));
        Ok(entries)
    }

    async fn clear_entries(&self) -> Result<u64, RepoError> {
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.len() as u64;
        entries.clear();
        Ok(removed)
    }
}

#[derive(Default)]
pub struct MockSettingsRepository {
    settings: Mutex<BTreeMap<String, String>>,
    pub fail_writes: AtomicBool,
}

impl MockSettingsRepository {
    pub fn value(&self, key: &str) -> Option<String> {
        self.settings.lock().unwrap().get(key).cloned()
    }
}

#[async_trait::async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn get_settings(&self) -> Result<BTreeMap<String, String>, RepoError> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<(), RepoError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(storage_failure());
        }
        self.settings
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn clear_setting_if_equals(
        &self,
        key: &str,
        expected: &str,
    ) -> Result<bool, RepoError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(storage_failure());
        }
        let mut settings = self.settings.lock().unwrap();
        match settings.get_mut(key) {
            Some(value) if value == expected => {
                value.clear();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct MockBackgroundStorage {
    objects: Mutex<BTreeMap<String, (Vec<u8>, String)>>,
    pub fail_removes: AtomicBool,
}

impl MockBackgroundStorage {
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).map(|(b, _)| b.clone())
    }
}

#[async_trait::async_trait]
impl BackgroundStoragePort for MockBackgroundStorage {
    async fn list_objects(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = self.keys();
        keys.reverse();
        Ok(keys)
    }

    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(key) {
            return Err(StorageError::AlreadyExists);
        }
        objects.insert(key.to_string(), (bytes, content_type.to_string()));
        Ok(())
    }

    async fn remove_object(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(StorageError::Io("injected failure".to_string()));
        }
        match self.objects.lock().unwrap().remove(key) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound),
        }
    }

    async fn contains_object(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.objects.lock().unwrap().contains_key(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://pool.test/storage/backgrounds/{}", key)
    }
}
