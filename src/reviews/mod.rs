//! Transient in-memory review board.
//!
//! Reviews are view-local state in the frontend: posted on a recipe page,
//! gone on navigation. The board mirrors that — no persistence, no backend,
//! contents dropped with the board itself.

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Review, User};

/// In-memory collection of reviews for the lifetime of one view.
#[derive(Default)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a review. Rating must be 1-5.
    pub fn add(
        &mut self,
        user: &User,
        recipe_id: i64,
        rating: u8,
        comment: &str,
    ) -> Result<Review, AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation(format!(
                "Rating must be between 1 and 5, got {}",
                rating
            )));
        }

        let review = Review {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            recipe_id,
            rating,
            comment: comment.to_string(),
            created_at: Utc::now().to_rfc3339(),
            user_name: user.name.clone(),
        };

        self.reviews.push(review.clone());
        Ok(review)
    }

    /// Reviews for one recipe, in posting order.
    pub fn for_recipe(&self, recipe_id: i64) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.recipe_id == recipe_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
