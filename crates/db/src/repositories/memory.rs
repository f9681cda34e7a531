//! In-memory implementation of both repository traits.
//!
//! Mirrors the MongoDB semantics closely enough for HTTP-level tests:
//! insertion order is the native list order, ids are fresh ObjectIds, and
//! timestamps come from the same clock.

use async_trait::async_trait;
use bson::oid::ObjectId;
use livecast_core::types::now;
use tokio::sync::RwLock;

use super::{OverlayRepo, SettingsRepo};
use crate::error::StoreResult;
use crate::models::overlay::{NewOverlay, Overlay, OverlayChanges};
use crate::models::settings::{Settings, UpdateSettings};

#[derive(Default)]
pub struct InMemoryStore {
    overlays: RwLock<Vec<Overlay>>,
    settings: RwLock<Option<Settings>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current settings document, if one has been created.
    pub async fn settings_snapshot(&self) -> Option<Settings> {
        self.settings.read().await.clone()
    }
}

fn materialize(new: NewOverlay) -> Overlay {
    let ts = now();
    Overlay {
        id: ObjectId::new().to_hex(),
        kind: new.kind,
        content: new.content,
        x: new.x,
        y: new.y,
        width: new.width,
        height: new.height,
        font_size: new.font_size,
        color: new.color,
        background_color: new.background_color,
        border_radius: new.border_radius,
        created_at: ts,
        updated_at: ts,
    }
}

#[async_trait]
impl OverlayRepo for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<Overlay>> {
        Ok(self.overlays.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Overlay>> {
        let hex = id.to_hex();
        Ok(self
            .overlays
            .read()
            .await
            .iter()
            .find(|o| o.id == hex)
            .cloned())
    }

    async fn create(&self, new: NewOverlay) -> StoreResult<Overlay> {
        let overlay = materialize(new);
        self.overlays.write().await.push(overlay.clone());
        Ok(overlay)
    }

    async fn create_many(&self, new: Vec<NewOverlay>) -> StoreResult<Vec<Overlay>> {
        let created: Vec<Overlay> = new.into_iter().map(materialize).collect();
        self.overlays.write().await.extend(created.iter().cloned());
        Ok(created)
    }

    async fn update(
        &self,
        id: ObjectId,
        changes: &OverlayChanges,
    ) -> StoreResult<Option<Overlay>> {
        let hex = id.to_hex();
        let mut overlays = self.overlays.write().await;
        Ok(overlays.iter_mut().find(|o| o.id == hex).map(|overlay| {
            changes.apply_to(overlay, now());
            overlay.clone()
        }))
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
        let hex = id.to_hex();
        let mut overlays = self.overlays.write().await;
        let before = overlays.len();
        overlays.retain(|o| o.id != hex);
        Ok(overlays.len() < before)
    }

    async fn delete_many(&self, ids: &[ObjectId]) -> StoreResult<u64> {
        let hexes: Vec<String> = ids.iter().map(|id| id.to_hex()).collect();
        let mut overlays = self.overlays.write().await;
        let before = overlays.len();
        overlays.retain(|o| !hexes.contains(&o.id));
        Ok((before - overlays.len()) as u64)
    }

    async fn count(&self, kind: Option<&str>) -> StoreResult<u64> {
        let overlays = self.overlays.read().await;
        let n = match kind {
            Some(k) => overlays.iter().filter(|o| o.kind == k).count(),
            None => overlays.len(),
        };
        Ok(n as u64)
    }

    async fn recent(&self, limit: i64) -> StoreResult<Vec<Overlay>> {
        let mut overlays = self.overlays.read().await.clone();
        overlays.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        overlays.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(overlays)
    }
}

#[async_trait]
impl SettingsRepo for InMemoryStore {
    async fn get_or_create(&self) -> StoreResult<Settings> {
        let mut settings = self.settings.write().await;
        let current =
            settings.get_or_insert_with(|| Settings::with_defaults(ObjectId::new().to_hex(), now()));
        Ok(current.clone())
    }

    async fn upsert(&self, update: &UpdateSettings) -> StoreResult<Settings> {
        let ts = now();
        let mut settings = self.settings.write().await;
        let current =
            settings.get_or_insert_with(|| Settings::with_defaults(ObjectId::new().to_hex(), ts));
        current.apply(update, ts);
        Ok(current.clone())
    }
}
