//! Recipe models matching the frontend Recipe and RecipeDetail interfaces.

use serde::{Deserialize, Serialize};

/// A recipe summary as shown on listing and search pages.
///
/// `summary` carries HTML from the upstream catalog; sanitizing it for
/// display is the frontend's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    /// Derived 0-5 rating, absent when the catalog supplies no score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub is_vegetarian: bool,
}

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    /// Free-text ingredient description as written in the source recipe
    pub original: String,
}

/// Full recipe detail as shown on the recipe page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub is_vegetarian: bool,
    /// Preparation instructions, HTML from the upstream catalog
    pub instructions: String,
    /// Ingredient entries in recipe order
    pub ingredients: Vec<Ingredient>,
    pub ready_in_minutes: u32,
    pub servings: u32,
}

/// The cuisines offered by the search filter dropdown.
pub const CUISINES: &[&str] = &[
    "African",
    "Asian",
    "American",
    "British",
    "Caribbean",
    "Chinese",
    "European",
    "French",
    "Greek",
    "Indian",
    "Italian",
    "Japanese",
    "Mediterranean",
    "Mexican",
    "Middle Eastern",
    "Thai",
    "Vietnamese",
];
