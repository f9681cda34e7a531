//! Document-store access for the Livecast overlay server.
//!
//! Two collections are used: `overlays` (one document per overlay) and
//! `settings` (a single document discriminated by `type = "app_settings"`).
//! Handlers only ever see the [`repositories::OverlayRepo`] and
//! [`repositories::SettingsRepo`] traits; MongoDB and in-memory
//! implementations live side by side.

pub mod documents;
pub mod error;
pub mod models;
pub mod repositories;

use bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, IndexModel};

pub use bson::oid::ObjectId;
pub use mongodb::Database;

pub const OVERLAYS_COLLECTION: &str = "overlays";
pub const SETTINGS_COLLECTION: &str = "settings";

/// Create a client for `uri` and select `db_name`.
///
/// The driver connects lazily, so this succeeds even when the server is
/// down; call [`health_check`] to verify reachability.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(db_name))
}

/// Round-trip a `ping` command to the server.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Create the indexes list/sort and singleton lookups rely on.
///
/// Index creation is idempotent, so this is safe to run on every start.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let overlays = db.collection::<bson::Document>(OVERLAYS_COLLECTION);
    overlays
        .create_index(IndexModel::builder().keys(doc! { "created_at": 1 }).build())
        .await?;
    overlays
        .create_index(IndexModel::builder().keys(doc! { "type": 1 }).build())
        .await?;

    // Unique so racing first upserts cannot insert a second singleton.
    db.collection::<bson::Document>(SETTINGS_COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "type": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    Ok(())
}

/// Parse a client-supplied document id. Returns `None` for anything that
/// is not a 24-character hex ObjectId.
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}
