//! Store error types.

use benefia_core::BenefiaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("store lock poisoned")]
    Lock,
}

impl From<StoreError> for BenefiaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => BenefiaError::NotFound {
                entity: entity.to_string(),
                id,
            },
            StoreError::Lock => BenefiaError::Store(err.to_string()),
        }
    }
}
