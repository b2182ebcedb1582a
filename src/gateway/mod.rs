//! HTTP client for the remote recipe catalog.
//!
//! Wraps the catalog's three read endpoints (random listing, complex search,
//! single recipe) into typed results. Every upstream record goes through the
//! same normalization: the vegetarian flag defaults to `false` when absent,
//! and the catalog's 0-100 quality score becomes a 0-5 rating.
//!
//! Failures are terminal for the triggering call: the original error is
//! logged here and the caller only sees the generic per-operation category.
//! One attempt per call, no retry or backoff.

use std::time::Duration;

use futures_util::future::try_join_all;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Ingredient, Recipe, RecipeDetail};

/// Number of recipes requested per listing or search page.
const PAGE_SIZE: u32 = 12;

/// Typed client over the remote recipe catalog.
#[derive(Clone)]
pub struct RecipeGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RecipeGateway {
    /// Build a gateway with a pooled client and the configured timeout.
    pub fn new(config: &Config) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch `count` random recipes (default 12).
    pub async fn fetch_random(&self, count: Option<u32>) -> Result<Vec<Recipe>, AppError> {
        let number = count.unwrap_or(PAGE_SIZE).to_string();

        match self
            .get_json::<RandomRecipesResponse>("/random", &[("number", number)])
            .await
        {
            Ok(body) => Ok(body.recipes.into_iter().map(CatalogRecipe::normalize).collect()),
            Err(err) => {
                tracing::error!("Error fetching recipes: {}", err);
                Err(AppError::FetchFailed("Failed to fetch recipes".to_string()))
            }
        }
    }

    /// Search the catalog by free-text query with optional cuisine and
    /// vegetarian filters.
    ///
    /// The diet filter is only applied when `vegetarian_only` is set;
    /// unset means unfiltered, there is no "non-vegetarian only" search.
    pub async fn search(
        &self,
        query: &str,
        cuisine: Option<&str>,
        vegetarian_only: bool,
    ) -> Result<Vec<Recipe>, AppError> {
        let mut params = vec![
            ("query", query.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("number", PAGE_SIZE.to_string()),
        ];
        if let Some(cuisine) = cuisine {
            params.push(("cuisine", cuisine.to_string()));
        }
        if vegetarian_only {
            params.push(("diet", "vegetarian".to_string()));
        }

        match self
            .get_json::<ComplexSearchResponse>("/complexSearch", &params)
            .await
        {
            Ok(body) => Ok(body.results.into_iter().map(CatalogRecipe::normalize).collect()),
            Err(err) => {
                tracing::error!("Error searching recipes: {}", err);
                Err(AppError::SearchFailed("Failed to search recipes".to_string()))
            }
        }
    }

    /// Fetch the full detail record for a single recipe.
    pub async fn fetch_by_id(&self, id: i64) -> Result<RecipeDetail, AppError> {
        match self
            .get_json::<CatalogRecipeDetail>(&format!("/{}/information", id), &[])
            .await
        {
            Ok(body) => Ok(body.normalize()),
            Err(err) => {
                tracing::error!("Error fetching recipe details: {}", err);
                Err(AppError::FetchFailed(
                    "Failed to fetch recipe details".to_string(),
                ))
            }
        }
    }

    /// Fetch all favorited recipes, one request per id, in parallel.
    ///
    /// A single failing lookup fails the whole batch.
    pub async fn fetch_favorites(&self, ids: &[i64]) -> Result<Vec<RecipeDetail>, AppError> {
        try_join_all(ids.iter().map(|&id| self.fetch_by_id(id))).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url).query(params);
        if let Some(ref key) = self.api_key {
            request = request.query(&[("apiKey", key.as_str())]);
        }

        let response = request.send().await?.error_for_status()?;
        response.json::<T>().await
    }
}

/// Response envelope of the random-recipes endpoint.
#[derive(Debug, Deserialize)]
struct RandomRecipesResponse {
    recipes: Vec<CatalogRecipe>,
}

/// Response envelope of the complex-search endpoint.
#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    results: Vec<CatalogRecipe>,
}

/// A recipe record as the catalog sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecipe {
    id: i64,
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    cuisines: Option<Vec<String>>,
    #[serde(default)]
    vegetarian: Option<bool>,
    #[serde(default)]
    spoonacular_score: Option<f64>,
}

impl CatalogRecipe {
    fn normalize(self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            image: self.image,
            summary: self.summary,
            cuisines: self.cuisines,
            rating: rating_from_score(self.spoonacular_score),
            is_vegetarian: self.vegetarian.unwrap_or(false),
        }
    }
}

/// A full recipe record from the single-recipe endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecipeDetail {
    id: i64,
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    cuisines: Option<Vec<String>>,
    #[serde(default)]
    vegetarian: Option<bool>,
    #[serde(default)]
    spoonacular_score: Option<f64>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    extended_ingredients: Vec<CatalogIngredient>,
    #[serde(default)]
    ready_in_minutes: u32,
    #[serde(default)]
    servings: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogIngredient {
    id: i64,
    original: String,
}

impl CatalogRecipeDetail {
    fn normalize(self) -> RecipeDetail {
        RecipeDetail {
            id: self.id,
            title: self.title,
            image: self.image,
            summary: self.summary,
            cuisines: self.cuisines,
            rating: rating_from_score(self.spoonacular_score),
            is_vegetarian: self.vegetarian.unwrap_or(false),
            instructions: self.instructions.unwrap_or_default(),
            ingredients: self
                .extended_ingredients
                .into_iter()
                .map(|i| Ingredient {
                    id: i.id,
                    original: i.original,
                })
                .collect(),
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
        }
    }
}

/// Derive a 0-5 rating from the catalog's 0-100 quality score.
fn rating_from_score(score: Option<f64>) -> Option<f64> {
    score.map(|s| (s / 20.0).clamp(0.0, 5.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vegetarian_defaults_to_false() {
        let raw: CatalogRecipe = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Plain Toast"
        }))
        .unwrap();

        let recipe = raw.normalize();
        assert!(!recipe.is_vegetarian);
        assert!(recipe.rating.is_none());
    }

    #[test]
    fn test_score_scales_to_rating() {
        let raw: CatalogRecipe = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Ratatouille",
            "vegetarian": true,
            "spoonacularScore": 90.0
        }))
        .unwrap();

        let recipe = raw.normalize();
        assert!(recipe.is_vegetarian);
        assert_eq!(recipe.rating, Some(4.5));
    }

    #[test]
    fn test_rating_is_clamped() {
        assert_eq!(rating_from_score(Some(120.0)), Some(5.0));
        assert_eq!(rating_from_score(Some(-3.0)), Some(0.0));
        assert_eq!(rating_from_score(Some(0.0)), Some(0.0));
        assert_eq!(rating_from_score(None), None);
    }

    #[test]
    fn test_detail_normalization_carries_ingredients_in_order() {
        let raw: CatalogRecipeDetail = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Soup",
            "instructions": "<p>Simmer.</p>",
            "extendedIngredients": [
                { "id": 11, "original": "2 carrots, diced" },
                { "id": 12, "original": "1 onion" }
            ],
            "readyInMinutes": 35,
            "servings": 4
        }))
        .unwrap();

        let detail = raw.normalize();
        assert_eq!(detail.ingredients.len(), 2);
        assert_eq!(detail.ingredients[0].original, "2 carrots, diced");
        assert_eq!(detail.ingredients[1].id, 12);
        assert_eq!(detail.ready_in_minutes, 35);
    }
}
