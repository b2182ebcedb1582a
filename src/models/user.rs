//! User model matching the frontend User interface.

use serde::{Deserialize, Serialize};

/// The current user identity, including the favorite set.
///
/// Serialized as a single JSON blob into the persisted session slot, so the
/// field names must stay in sync with what the frontend historically wrote
/// to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Favorited recipe ids in insertion order. Order carries no meaning,
    /// but is preserved to keep the persisted blob deterministic.
    #[serde(default)]
    pub favorite_recipes: Vec<i64>,
}

impl User {
    /// Whether the given recipe is currently favorited.
    pub fn is_favorite(&self, recipe_id: i64) -> bool {
        self.favorite_recipes.contains(&recipe_id)
    }
}
