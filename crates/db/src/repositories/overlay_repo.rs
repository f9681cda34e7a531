//! MongoDB repository for the `overlays` collection.

use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use livecast_core::types::now;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::OverlayRepo;
use crate::documents::{overlay_set_document, OverlayDocument};
use crate::error::StoreResult;
use crate::models::overlay::{NewOverlay, Overlay, OverlayChanges};
use crate::OVERLAYS_COLLECTION;

/// Provides data access for overlays stored in MongoDB.
#[derive(Clone)]
pub struct MongoOverlayRepo {
    collection: Collection<OverlayDocument>,
}

impl MongoOverlayRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(OVERLAYS_COLLECTION),
        }
    }
}

#[async_trait]
impl OverlayRepo for MongoOverlayRepo {
    async fn list(&self) -> StoreResult<Vec<Overlay>> {
        let docs: Vec<OverlayDocument> = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(docs.into_iter().map(Overlay::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Overlay>> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(Overlay::from))
    }

    async fn create(&self, new: NewOverlay) -> StoreResult<Overlay> {
        let doc = OverlayDocument::new(new, now());
        self.collection.insert_one(&doc).await?;
        Ok(doc.into())
    }

    async fn create_many(&self, new: Vec<NewOverlay>) -> StoreResult<Vec<Overlay>> {
        if new.is_empty() {
            return Ok(Vec::new());
        }

        let ts = now();
        let docs: Vec<OverlayDocument> = new
            .into_iter()
            .map(|n| OverlayDocument::new(n, ts))
            .collect();
        self.collection.insert_many(&docs).await?;

        Ok(docs.into_iter().map(Overlay::from).collect())
    }

    async fn update(
        &self,
        id: ObjectId,
        changes: &OverlayChanges,
    ) -> StoreResult<Option<Overlay>> {
        let set = overlay_set_document(changes, now());
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(Overlay::from))
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_many(&self, ids: &[ObjectId]) -> StoreResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        Ok(result.deleted_count)
    }

    async fn count(&self, kind: Option<&str>) -> StoreResult<u64> {
        let filter = match kind {
            Some(k) => doc! { "type": k },
            None => doc! {},
        };
        Ok(self.collection.count_documents(filter).await?)
    }

    async fn recent(&self, limit: i64) -> StoreResult<Vec<Overlay>> {
        let docs: Vec<OverlayDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(docs.into_iter().map(Overlay::from).collect())
    }
}
