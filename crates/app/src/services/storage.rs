use crate::error::Result;
use crate::services::SharedStore;
use crate::storage::FileRef;

#[derive(Clone)]
pub struct StorageService {
    store: SharedStore,
}

impl StorageService {
    pub(super) fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn upload(&self, path: &str, bytes: &[u8]) -> Result<String> {
        Ok(self.store.upload(path, bytes)?)
    }

    pub fn list(&self, prefix: &str) -> Result<Vec<FileRef>> {
        Ok(self.store.list(prefix)?)
    }

    pub fn remove(&self, paths: &[String]) -> Result<()> {
        Ok(self.store.remove(paths)?)
    }

    pub fn public_url(&self, path: &str) -> String {
        self.store.public_url(path)
    }
}
