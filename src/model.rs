//! EntityType record and the fields accepted on create.

use serde::{Deserialize, Serialize};

/// A user-defined category of content entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EntityType {
    pub name: String,
    /// URL-safe identifier, unique across records.
    pub slug: String,
    pub icon: String,
}

/// Create input as received over HTTP. Fields are not validated here: absent
/// values are handed to the store as-is and its constraints decide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntityType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl NewEntityType {
    pub fn new(name: impl Into<String>, slug: impl Into<String>, icon: impl Into<String>) -> Self {
        NewEntityType {
            name: Some(name.into()),
            slug: Some(slug.into()),
            icon: Some(icon.into()),
        }
    }
}
