//! MongoDB repository for the settings singleton.
//!
//! Both operations are single `find_one_and_update` upserts keyed on the
//! `type` discriminator. The unique index on `type` (see
//! [`crate::ensure_indexes`]) rejects the losing insert when two first
//! upserts race; that upsert is re-run and then matches the winner's document.

use async_trait::async_trait;
use bson::{doc, Document};
use livecast_core::settings::{
    DEFAULT_AUTOPLAY, DEFAULT_OVERLAY_ENABLED, DEFAULT_RTSP_URL, DEFAULT_VOLUME,
    SETTINGS_DISCRIMINATOR,
};
use livecast_core::types::{now, Timestamp};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::SettingsRepo;
use crate::documents::SettingsDocument;
use crate::error::{StoreError, StoreResult};
use crate::models::settings::{Settings, UpdateSettings};
use crate::SETTINGS_COLLECTION;

/// Provides data access for the settings singleton stored in MongoDB.
#[derive(Clone)]
pub struct MongoSettingsRepo {
    collection: Collection<SettingsDocument>,
}

impl MongoSettingsRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(SETTINGS_COLLECTION),
        }
    }

    async fn upsert_with(&self, update: Document) -> StoreResult<Settings> {
        match self.find_and_upsert(update.clone()).await {
            Err(StoreError::Mongo(err)) if is_duplicate_key(&err) => {
                tracing::debug!("Settings singleton inserted concurrently, retrying upsert");
                self.find_and_upsert(update).await
            }
            other => other,
        }
    }

    async fn find_and_upsert(&self, update: Document) -> StoreResult<Settings> {
        self.collection
            .find_one_and_update(doc! { "type": SETTINGS_DISCRIMINATOR }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .map(Settings::from)
            .ok_or_else(|| StoreError::Unexpected("settings upsert returned no document".into()))
    }
}

#[async_trait]
impl SettingsRepo for MongoSettingsRepo {
    async fn get_or_create(&self) -> StoreResult<Settings> {
        let ts = bson::DateTime::from_chrono(now());
        self.upsert_with(doc! {
            "$setOnInsert": {
                "rtsp_url": DEFAULT_RTSP_URL,
                "volume": DEFAULT_VOLUME,
                "autoplay": DEFAULT_AUTOPLAY,
                "overlay_enabled": DEFAULT_OVERLAY_ENABLED,
                "created_at": ts,
                "updated_at": ts,
            }
        })
        .await
    }

    async fn upsert(&self, update: &UpdateSettings) -> StoreResult<Settings> {
        self.upsert_with(settings_update_document(update, now())).await
    }
}

const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match *err.kind {
        ErrorKind::Command(ref command) => command.code == DUPLICATE_KEY,
        ErrorKind::Write(WriteFailure::WriteError(ref write)) => write.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// Build the upsert body for a settings update.
///
/// Supplied fields go to `$set`; on insert, the remaining fields receive
/// their defaults. A path never appears in both operators.
fn settings_update_document(update: &UpdateSettings, now: Timestamp) -> Document {
    let ts = bson::DateTime::from_chrono(now);
    let mut set = doc! { "updated_at": ts };
    let mut on_insert = doc! { "created_at": ts };

    match &update.rtsp_url {
        Some(url) => set.insert("rtsp_url", url.as_str()),
        None => on_insert.insert("rtsp_url", DEFAULT_RTSP_URL),
    };
    match update.volume {
        Some(volume) => set.insert("volume", volume.get()),
        None => on_insert.insert("volume", DEFAULT_VOLUME),
    };
    match update.autoplay {
        Some(autoplay) => set.insert("autoplay", autoplay),
        None => on_insert.insert("autoplay", DEFAULT_AUTOPLAY),
    };
    match update.overlay_enabled {
        Some(enabled) => set.insert("overlay_enabled", enabled),
        None => on_insert.insert("overlay_enabled", DEFAULT_OVERLAY_ENABLED),
    };

    doc! { "$set": set, "$setOnInsert": on_insert }
}
