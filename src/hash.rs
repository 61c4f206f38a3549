//! Content digest for response payloads.

use crate::error::AppError;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// SHA-256 over the JSON serialization of `value`, lowercase hex.
/// Struct fields serialize in declaration order and `serde_json::Map` keeps keys sorted,
/// so equal values always produce equal digests.
pub fn create_hash<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let bytes = serde_json::to_vec(value)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
