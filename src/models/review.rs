//! Review model matching the frontend Review interface.

use serde::{Deserialize, Serialize};

/// A user review of a recipe.
///
/// Reviews are transient: they live in a [`crate::reviews::ReviewBoard`] for
/// the lifetime of a view and are not sent to any backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub recipe_id: i64,
    /// Star rating, 1-5
    pub rating: u8,
    pub comment: String,
    /// RFC3339 creation timestamp
    pub created_at: String,
    /// Author display name, denormalized at creation time
    pub user_name: String,
}
