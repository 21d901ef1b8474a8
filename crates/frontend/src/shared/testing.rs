//! Test doubles for the browser-facing traits

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::shared::export::Download;
use crate::shared::notifications::{NoticeLevel, Notifier};
use crate::system::auth::storage::{KeyValueStore, StorageError};

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(level, _)| *level == NoticeLevel::Error)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}

/// In-memory key/value store; clones share the same map, like two page loads
/// sharing one localStorage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_on: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn with(items: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        for (k, v) in items {
            storage
                .items
                .borrow_mut()
                .insert(k.to_string(), v.to_string());
        }
        storage
    }

    /// Makes every write to `key` fail
    pub fn fail_writes_to(&self, key: &str) {
        *self.fail_on.borrow_mut() = Some(key.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_on.borrow().as_deref() == Some(key) {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Default)]
pub struct RecordingDownload {
    pub files: RefCell<Vec<(String, String, Vec<u8>)>>,
    pub fail: bool,
}

impl RecordingDownload {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Download for RecordingDownload {
    fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<(), String> {
        if self.fail {
            return Err("download blocked".to_string());
        }
        self.files
            .borrow_mut()
            .push((filename.to_string(), mime_type.to_string(), bytes.to_vec()));
        Ok(())
    }
}
