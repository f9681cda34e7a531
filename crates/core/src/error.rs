#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on an overlay id.
    pub fn overlay_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Overlay",
            id: id.into(),
        }
    }
}
