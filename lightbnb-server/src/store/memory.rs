//! In-memory property store
//!
//! Holds listings added through the API. Created explicitly at startup,
//! optionally seeded from a JSON export keyed by property id:
//!
//! ```json
//! { "1": { "id": 1, "owner_id": 3, "title": "Speed lamp", ... } }
//! ```
//!
//! Ids come from an atomic counter and are never reused, even when
//! listings are added concurrently. Once `i32::MAX` has been handed out
//! (or seeded), further adds fail with `StoreError::IdSpaceExhausted`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::fs;
use tokio::sync::RwLock;

use crate::models::{NewProperty, Property};

/// Errors seeding or growing the store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no property ids left after {}", i32::MAX)]
    IdSpaceExhausted,
}

/// Listing store shared across requests
#[derive(Debug)]
pub struct MemoryPropertyStore {
    /// Next id to hand out; one past `i32::MAX` means exhausted.
    next_id: AtomicI64,
    properties: RwLock<BTreeMap<i32, Property>>,
}

impl MemoryPropertyStore {
    /// Empty store; the first listing gets id 1.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            properties: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store pre-populated with `properties`; new ids start after the largest.
    pub fn with_properties(properties: impl IntoIterator<Item = Property>) -> Self {
        let properties: BTreeMap<i32, Property> =
            properties.into_iter().map(|p| (p.id, p)).collect();
        let next_id = properties
            .keys()
            .next_back()
            .map_or(1, |max| i64::from(*max) + 1);

        Self {
            next_id: AtomicI64::new(next_id),
            properties: RwLock::new(properties),
        }
    }

    /// Load a JSON object of `id -> property` into a new store.
    pub async fn seed_from_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let seeded: BTreeMap<String, Property> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: path.display().to_string(),
                source,
            })?;

        let store = Self::with_properties(seeded.into_values());
        tracing::info!(
            path = %path.display(),
            count = store.properties.read().await.len(),
            "seeded property store"
        );
        Ok(store)
    }

    /// Assign the next id, store the listing, return it.
    pub async fn add(&self, listing: NewProperty) -> Result<Property, StoreError> {
        let id = self
            .next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                (next <= i64::from(i32::MAX)).then_some(next + 1)
            })
            .map_err(|_| StoreError::IdSpaceExhausted)?;
        let id = i32::try_from(id).map_err(|_| StoreError::IdSpaceExhausted)?;
        let property = Property { id, listing };

        self.properties.write().await.insert(id, property.clone());
        tracing::debug!(property_id = id, "property added");
        Ok(property)
    }

    pub async fn get(&self, id: i32) -> Option<Property> {
        self.properties.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.properties.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.properties.read().await.is_empty()
    }
}

impl Default for MemoryPropertyStore {
    fn default() -> Self {
        Self::new()
    }
}
