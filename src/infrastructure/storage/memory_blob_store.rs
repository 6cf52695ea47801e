//! In-process implementation of the blob store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::domain::repositories::BlobStore;
use crate::error::AppError;

/// Blob store backed by process memory.
///
/// Returns public URLs with the same shape as the hosted store so the rest
/// of the pipeline is exercised unchanged in tests and local development.
pub struct MemoryBlobStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    base_url: String,
}

impl MemoryBlobStore {
    /// Creates an empty in-memory blob store.
    pub fn new(base_url: impl Into<String>) -> Self {
        debug!("Using MemoryBlobStore (in-process storage)");
        Self {
            objects: Mutex::new(HashMap::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the stored bytes for `file_name`, if any.
    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(file_name).cloned())
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| AppError::storage("blob store poisoned"))?;

        objects.insert(file_name.to_string(), bytes);

        Ok(format!(
            "{}/storage/v1/object/public/qrs/{file_name}",
            self.base_url
        ))
    }
}
