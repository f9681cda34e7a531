/// Errors raised by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Document encoding error: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("Document decoding error: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Unexpected document store result: {0}")]
    Unexpected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
