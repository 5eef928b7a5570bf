//! In-memory store for the most recent successful lookup

use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(test)]
use mockall::automock;
use reqwest::Url;
use tracing::debug;

/// Latest catalog version and store link from the most recent successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedEntry {
    pub latest_version: String,
    pub store_url: Option<String>,
}

impl CachedEntry {
    /// Returns the store URL if it is present and syntactically valid
    pub fn store_link(&self) -> Option<Url> {
        self.store_url
            .as_deref()
            .and_then(|url| Url::parse(url).ok())
    }
}

/// Trait for storing and retrieving the latest lookup result
#[cfg_attr(test, automock)]
pub trait VersionStore: Send + Sync + 'static {
    /// Get the entry written by the most recent successful lookup
    fn latest(&self) -> Option<CachedEntry>;

    /// Replace the stored entry
    fn replace(&self, entry: CachedEntry);
}

/// Process-lifetime store guarded by a mutex; empty until the first successful lookup
#[derive(Debug, Default)]
pub struct MemoryStore {
    entry: Mutex<Option<CachedEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest catalog version known to this store
    pub fn latest_version(&self) -> Option<String> {
        self.lock_entry()
            .as_ref()
            .map(|entry| entry.latest_version.clone())
    }

    // The guarded value is replaced wholesale, so a poisoned lock still holds a complete entry
    fn lock_entry(&self) -> MutexGuard<'_, Option<CachedEntry>> {
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VersionStore for MemoryStore {
    fn latest(&self) -> Option<CachedEntry> {
        self.lock_entry().clone()
    }

    fn replace(&self, entry: CachedEntry) {
        debug!("Caching latest version {}", entry.latest_version);
        *self.lock_entry() = Some(entry);
    }
}
