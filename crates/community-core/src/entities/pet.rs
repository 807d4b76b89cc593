//! Pet entity - a profile owned by a user, addressed by owner + slug

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pet profile entity; `slug` is unique per owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            name: name.into(),
            slug: slug.into(),
            species: None,
            bio: None,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply(&mut self, patch: PetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(species) = patch.species {
            self.species = species;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a Pet; owner and slug are immutable
#[derive(Debug, Clone, Default)]
pub struct PetPatch {
    pub name: Option<String>,
    pub species: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
}
