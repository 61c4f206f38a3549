//! Standard response envelope: `{ data, metadata: { hash } }`.

use crate::error::AppError;
use crate::hash::create_hash;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Envelope<T> {
    pub data: T,
    pub metadata: Metadata,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `data` and stamp `metadata.hash` with the digest of `{ data, metadata: {} }`.
    pub fn sealed(data: T) -> Result<Self, AppError> {
        let mut envelope = Envelope {
            data,
            metadata: Metadata::default(),
        };
        envelope.metadata.hash = Some(create_hash(&envelope)?);
        Ok(envelope)
    }
}
