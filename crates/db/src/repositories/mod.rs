//! Repository traits and their implementations.
//!
//! Handlers depend on the traits only. [`MongoOverlayRepo`] and
//! [`MongoSettingsRepo`] back production; [`InMemoryStore`] implements both
//! traits for tests and local runs without a database.

pub mod memory;
pub mod overlay_repo;
pub mod settings_repo;

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::error::StoreResult;
use crate::models::overlay::{NewOverlay, Overlay, OverlayChanges};
use crate::models::settings::{Settings, UpdateSettings};

pub use memory::InMemoryStore;
pub use overlay_repo::MongoOverlayRepo;
pub use settings_repo::MongoSettingsRepo;

/// Data access for the `overlays` collection.
#[async_trait]
pub trait OverlayRepo: Send + Sync {
    /// All overlays in store-native order.
    async fn list(&self) -> StoreResult<Vec<Overlay>>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Overlay>>;

    /// Insert one overlay, stamping `created_at` and `updated_at`.
    async fn create(&self, new: NewOverlay) -> StoreResult<Overlay>;

    /// Insert many overlays in a single store call, preserving input order.
    async fn create_many(&self, new: Vec<NewOverlay>) -> StoreResult<Vec<Overlay>>;

    /// Write `changes` and refresh `updated_at`.
    ///
    /// Returns `None` if no overlay has this id.
    async fn update(&self, id: ObjectId, changes: &OverlayChanges)
        -> StoreResult<Option<Overlay>>;

    /// Returns `true` if an overlay was removed.
    async fn delete(&self, id: ObjectId) -> StoreResult<bool>;

    /// Remove every overlay whose id is in `ids`; returns how many were removed.
    async fn delete_many(&self, ids: &[ObjectId]) -> StoreResult<u64>;

    /// Count overlays, optionally restricted to one `type`.
    async fn count(&self, kind: Option<&str>) -> StoreResult<u64>;

    /// The `limit` most recently created overlays, newest first.
    async fn recent(&self, limit: i64) -> StoreResult<Vec<Overlay>>;
}

/// Data access for the settings singleton.
#[async_trait]
pub trait SettingsRepo: Send + Sync {
    /// Return the singleton, creating it with defaults if absent.
    async fn get_or_create(&self) -> StoreResult<Settings>;

    /// Merge `update` into the singleton (creating it if absent) and refresh
    /// `updated_at`.
    async fn upsert(&self, update: &UpdateSettings) -> StoreResult<Settings>;
}
